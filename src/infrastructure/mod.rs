mod loader;
mod renderer;
mod dialog;

pub use loader::{decode_certificate, load_certificate};
pub use renderer::{JsonRenderer, PrettyRenderer};
pub use dialog::{PresetSaveDialog, PromptSaveDialog};
