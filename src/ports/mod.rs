mod certificate;
mod renderer;
mod dialog;

pub use certificate::{CertificateInfo, EntityField, PublicKeyKind};
pub use renderer::Renderer;
pub use dialog::SaveDialog;
