use std::path::PathBuf;

/// Destination chooser for the export action. `None` means the user
/// cancelled, which makes the export a silent no-op.
pub trait SaveDialog: Send + Sync {
    fn choose_path(&self, suggested_name: &str, extension: &str) -> Option<PathBuf>;
}
