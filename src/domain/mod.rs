mod property;
mod report;
mod keyusage;
mod hex;
mod error;

pub use property::{CertificateProperty, PropertyTable, PROPERTY_COLUMNS, PROPERTY_ROWS};
pub use report::{EntityFacts, InspectionReport};
pub use keyusage::KeyUsageSet;
pub use hex::hex_with_separator;
pub use error::{CertdocError, ErrorClass};
