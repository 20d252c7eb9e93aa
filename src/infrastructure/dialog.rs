use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::ports::SaveDialog;

/// Interactive save prompt on stdin/stderr. A blank answer (or EOF) cancels.
pub struct PromptSaveDialog;

impl PromptSaveDialog {
    pub fn new() -> Self { Self }
}

impl SaveDialog for PromptSaveDialog {
    fn choose_path(&self, suggested_name: &str, extension: &str) -> Option<PathBuf> {
        let mut stderr = io::stderr();
        let _ = write!(
            stderr,
            "Where do you want to save this certificate? (*.{}, e.g. {}, blank cancels): ",
            extension, suggested_name
        );
        let _ = stderr.flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(answer))
                }
            }
        }
    }
}

/// Non-interactive destination, used when the path was given up front.
pub struct PresetSaveDialog {
    path: PathBuf,
}

impl PresetSaveDialog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SaveDialog for PresetSaveDialog {
    fn choose_path(&self, _suggested_name: &str, _extension: &str) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
