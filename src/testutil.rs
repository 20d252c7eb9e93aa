use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::KeyUsageSet;
use crate::ports::{CertificateInfo, EntityField, PublicKeyKind};

/// Hand-built certificate engine for unit tests.
pub(crate) struct StubCertificate {
    pub version: u32,
    pub serial: Vec<u8>,
    pub dn: String,
    pub common_name: String,
    pub email: String,
    pub organization: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub key_kind: PublicKeyKind,
    pub key_bits: u32,
    pub key_bytes: Vec<u8>,
    pub usage: KeyUsageSet,
    pub data: Vec<u8>,
}

impl StubCertificate {
    pub fn sample() -> Self {
        Self {
            version: 3,
            serial: vec![0xAB, 0xCD, 0x01],
            dn: "C=US, ST=California, O=Example Corp, CN=certdoc.example".to_string(),
            common_name: "certdoc.example".to_string(),
            email: "certs@example.com".to_string(),
            organization: "Example Corp".to_string(),
            not_before: Utc.with_ymd_and_hms(2026, 8, 6, 18, 14, 24).unwrap(),
            not_after: Utc.with_ymd_and_hms(2046, 8, 1, 18, 14, 24).unwrap(),
            key_kind: PublicKeyKind::Rsa,
            key_bits: 2048,
            key_bytes: vec![0x30, 0x82, 0x01, 0x0A],
            usage: KeyUsageSet {
                digital_signature: true,
                key_encipherment: true,
                ..KeyUsageSet::default()
            },
            data: b"certificate-bytes".to_vec(),
        }
    }

    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    fn field(&self, field: EntityField) -> String {
        match field {
            EntityField::DistinguishedName => self.dn.clone(),
            EntityField::CommonName => self.common_name.clone(),
            EntityField::EmailAddress => self.email.clone(),
            EntityField::Organization => self.organization.clone(),
        }
    }
}

impl CertificateInfo for StubCertificate {
    fn version(&self) -> u32 {
        self.version
    }

    fn serial_number(&self) -> Bytes {
        Bytes::copy_from_slice(&self.serial)
    }

    fn issuer_info(&self, field: EntityField) -> String {
        self.field(field)
    }

    fn subject_info(&self, field: EntityField) -> String {
        self.field(field)
    }

    fn validity_start(&self) -> DateTime<Utc> {
        self.not_before
    }

    fn validity_end(&self) -> DateTime<Utc> {
        self.not_after
    }

    fn public_key_kind(&self) -> PublicKeyKind {
        self.key_kind
    }

    fn public_key_strength(&self) -> u32 {
        self.key_bits
    }

    fn public_key(&self) -> Bytes {
        Bytes::copy_from_slice(&self.key_bytes)
    }

    fn key_usage(&self) -> KeyUsageSet {
        self.usage
    }

    fn certificate_data(&self) -> Bytes {
        Bytes::copy_from_slice(&self.data)
    }
}
