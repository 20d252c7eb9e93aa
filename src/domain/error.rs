use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Cert,
    Range,
    Export,
    Other,
}

impl ErrorClass {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorClass::Input => 2,
            ErrorClass::Cert => 3,
            ErrorClass::Range => 4,
            ErrorClass::Export => 5,
            ErrorClass::Other => 1,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ErrorClass::Input => "INPUT",
            ErrorClass::Cert => "CERT",
            ErrorClass::Range => "RANGE",
            ErrorClass::Export => "EXPORT",
            ErrorClass::Other => "ERROR",
        }
    }
}

#[derive(Debug)]
pub struct CertdocError {
    pub class: ErrorClass,
    pub message: String,
}

impl CertdocError {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self { class, message: message.into() }
    }

    pub fn input(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Input, msg) }
    pub fn cert(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Cert, msg) }
    pub fn range(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Range, msg) }
    pub fn export(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Export, msg) }
    pub fn other(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Other, msg) }

    pub fn format_stderr(&self) -> String {
        format!("error[{}]: {}", self.class.tag(), self.message)
    }
}

impl fmt::Display for CertdocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_stderr())
    }
}

impl std::error::Error for CertdocError {}
