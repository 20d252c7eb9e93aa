use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use super::Config;
use crate::domain::CertdocError;
use crate::ports::{CertificateInfo, SaveDialog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, bytes: usize },
    Cancelled,
}

/// One-shot export of the raw certificate bytes to a user-chosen path.
pub struct ExportUseCase<S: SaveDialog> {
    dialog: S,
    config: Config,
}

impl<S: SaveDialog> ExportUseCase<S> {
    pub fn new(dialog: S, config: Config) -> Self {
        Self { dialog, config }
    }

    /// Asks the dialog for a destination and writes the certificate bytes
    /// verbatim. A cancelled dialog is a no-op, not an error. A zero-length
    /// payload writes an empty file and counts as success; only an I/O
    /// failure from create or write is reported.
    pub fn execute(&self, cert: &dyn CertificateInfo) -> Result<ExportOutcome, CertdocError> {
        let path = match self
            .dialog
            .choose_path(&self.config.export_name, &self.config.export_extension)
        {
            Some(path) => path,
            None => {
                log::info!("export cancelled");
                return Ok(ExportOutcome::Cancelled);
            }
        };

        let data = cert.certificate_data();
        let mut file = File::create(&path)
            .map_err(|e| CertdocError::export(format!("cannot open {}: {}", path.display(), e)))?;
        file.write_all(&data)
            .map_err(|e| CertdocError::export(format!("cannot write {}: {}", path.display(), e)))?;

        log::info!("wrote {} bytes to {}", data.len(), path.display());
        Ok(ExportOutcome::Written { path, bytes: data.len() })
    }
}
