use bytes::Bytes;
use chrono::{DateTime, Utc};
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

use crate::domain::{CertdocError, KeyUsageSet};
use crate::ports::{CertificateInfo, EntityField, PublicKeyKind};

/// Eagerly decoded snapshot of one certificate, the concrete
/// [`CertificateInfo`] engine behind the inspection view.
#[derive(Debug, Clone)]
pub struct ParsedCertificate {
    version: u32,
    serial: Bytes,
    issuer_dn: String,
    issuer_cn: String,
    issuer_email: String,
    issuer_org: String,
    subject_dn: String,
    subject_cn: String,
    subject_email: String,
    subject_org: String,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    key_kind: PublicKeyKind,
    key_bits: u32,
    key_bytes: Bytes,
    usage: KeyUsageSet,
    der: Bytes,
}

pub fn parse_certificate(der: &[u8]) -> Result<ParsedCertificate, CertdocError> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| CertdocError::cert(format!("failed to parse certificate: {}", e)))?;

    let (key_kind, key_bits) = decode_public_key(cert.public_key());
    let key_bytes = Bytes::copy_from_slice(&cert.public_key().subject_public_key.data);

    let parsed = ParsedCertificate {
        // X.509 stores the version zero-based; display numbering is 1-based
        version: cert.version().0 + 1,
        // the minimal big-endian bytes, without the DER sign padding octet
        serial: Bytes::from(cert.serial.to_bytes_be()),
        issuer_dn: cert.issuer().to_string(),
        issuer_cn: first_common_name(cert.issuer()),
        issuer_email: first_email(cert.issuer()),
        issuer_org: first_organization(cert.issuer()),
        subject_dn: cert.subject().to_string(),
        subject_cn: first_common_name(cert.subject()),
        subject_email: first_email(cert.subject()),
        subject_org: first_organization(cert.subject()),
        not_before: to_datetime(cert.validity().not_before),
        not_after: to_datetime(cert.validity().not_after),
        key_kind,
        key_bits,
        key_bytes,
        usage: decode_key_usage(&cert),
        der: Bytes::copy_from_slice(der),
    };

    log::debug!(
        "parsed certificate: subject={:?} issuer={:?} key={} ({} bits)",
        parsed.subject_cn,
        parsed.issuer_cn,
        parsed.key_kind.readable(),
        parsed.key_bits
    );

    Ok(parsed)
}

impl CertificateInfo for ParsedCertificate {
    fn version(&self) -> u32 {
        self.version
    }

    fn serial_number(&self) -> Bytes {
        self.serial.clone()
    }

    fn issuer_info(&self, field: EntityField) -> String {
        match field {
            EntityField::DistinguishedName => self.issuer_dn.clone(),
            EntityField::CommonName => self.issuer_cn.clone(),
            EntityField::EmailAddress => self.issuer_email.clone(),
            EntityField::Organization => self.issuer_org.clone(),
        }
    }

    fn subject_info(&self, field: EntityField) -> String {
        match field {
            EntityField::DistinguishedName => self.subject_dn.clone(),
            EntityField::CommonName => self.subject_cn.clone(),
            EntityField::EmailAddress => self.subject_email.clone(),
            EntityField::Organization => self.subject_org.clone(),
        }
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
        self.key_bytes.clone()
    }

    fn key_usage(&self) -> KeyUsageSet {
        self.usage
    }

    fn certificate_data(&self) -> Bytes {
        self.der.clone()
    }
}

fn first_common_name(name: &X509Name) -> String {
    name.iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn first_email(name: &X509Name) -> String {
    name.iter_email()
        .next()
        .and_then(|email| email.as_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn first_organization(name: &X509Name) -> String {
    name.iter_organization()
        .next()
        .and_then(|org| org.as_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn to_datetime(time: ASN1Time) -> DateTime<Utc> {
    DateTime::from_timestamp(time.timestamp(), 0).unwrap_or_default()
}

fn decode_public_key(spki: &SubjectPublicKeyInfo) -> (PublicKeyKind, u32) {
    match spki.parsed() {
        Ok(key) => {
            let kind = match key {
                PublicKey::RSA(_) => PublicKeyKind::Rsa,
                PublicKey::DSA(_) => PublicKeyKind::Dsa,
                PublicKey::EC(_) => PublicKeyKind::Ec,
                _ => PublicKeyKind::Unknown,
            };
            (kind, key.key_size() as u32)
        }
        Err(_) => (PublicKeyKind::Unknown, 0),
    }
}

fn decode_key_usage(cert: &X509Certificate) -> KeyUsageSet {
    cert.key_usage()
        .ok()
        .flatten()
        .map(|ext| {
            let ku = ext.value;
            KeyUsageSet {
                digital_signature: ku.digital_signature(),
                non_repudiation: ku.non_repudiation(),
                key_encipherment: ku.key_encipherment(),
                data_encipherment: ku.data_encipherment(),
                key_agreement: ku.key_agreement(),
                certificate_signing: ku.key_cert_sign(),
                crl_signing: ku.crl_sign(),
                encipher_only: ku.encipher_only(),
                decipher_only: ku.decipher_only(),
            }
        })
        .unwrap_or_default()
}
