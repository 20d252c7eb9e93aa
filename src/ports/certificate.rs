use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::KeyUsageSet;

/// Distinguished-name component selector for [`CertificateInfo::issuer_info`]
/// and [`CertificateInfo::subject_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityField {
    DistinguishedName,
    CommonName,
    EmailAddress,
    Organization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyKind {
    Rsa,
    Dsa,
    Ec,
    Unknown,
}

impl PublicKeyKind {
    pub fn readable(&self) -> &'static str {
        match self {
            PublicKeyKind::Rsa => "RSA",
            PublicKeyKind::Dsa => "DSA",
            PublicKeyKind::Ec => "EC",
            PublicKeyKind::Unknown => "Unknown Type",
        }
    }
}

/// Contract of the certificate engine this tool inspects through.
///
/// Implementations hold an already-decoded certificate; every accessor is
/// infallible and fields the certificate does not carry come back empty.
pub trait CertificateInfo {
    fn version(&self) -> u32;
    fn serial_number(&self) -> Bytes;
    fn issuer_info(&self, field: EntityField) -> String;
    fn subject_info(&self, field: EntityField) -> String;
    fn validity_start(&self) -> DateTime<Utc>;
    fn validity_end(&self) -> DateTime<Utc>;
    fn public_key_kind(&self) -> PublicKeyKind;
    fn public_key_strength(&self) -> u32;
    fn public_key(&self) -> Bytes;
    fn key_usage(&self) -> KeyUsageSet;
    fn certificate_data(&self) -> Bytes;
}
