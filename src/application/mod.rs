mod inspect;
mod export;
mod cert_parser;
mod config;

pub use inspect::{build_property_table, build_report};
pub use export::{ExportOutcome, ExportUseCase};
pub use cert_parser::{parse_certificate, ParsedCertificate};
pub use config::Config;
