use chrono::{DateTime, Utc};

use crate::domain::{
    hex_with_separator, CertificateProperty, EntityFacts, InspectionReport, PropertyTable,
};
use crate::ports::{CertificateInfo, EntityField};

/// Display pattern for validity timestamps: three-letter month, two-digit
/// day, four-digit year, 24-hour time.
const TIMESTAMP_FORMAT: &str = "%b %d %Y %H:%M:%S";

/// Builds the fixed 8-row property table. Every display value is derived
/// here, once; the table never goes back to the certificate.
pub fn build_property_table(cert: &dyn CertificateInfo) -> PropertyTable {
    let raw_public_key_hex = hex_with_separator(&cert.public_key(), ' ');
    let rows = [
        CertificateProperty::new("Version", format!("V{}", cert.version())),
        CertificateProperty::new("Serial Number", hex_with_separator(&cert.serial_number(), ' ')),
        CertificateProperty::new("Issuer", cert.issuer_info(EntityField::DistinguishedName)),
        CertificateProperty::new("Issued On", format_timestamp(cert.validity_start())),
        CertificateProperty::new("Expires On", format_timestamp(cert.validity_end())),
        CertificateProperty::new("Subject", cert.subject_info(EntityField::DistinguishedName)),
        CertificateProperty::with_detail(
            "Public Key",
            format!(
                "{} ({} bits)",
                cert.public_key_kind().readable(),
                cert.public_key_strength()
            ),
            raw_public_key_hex.clone(),
        ),
        CertificateProperty::new("Key Usage", cert.key_usage().readable()),
    ];
    PropertyTable::new(rows, raw_public_key_hex)
}

/// Builds the full inspection report: summary facts, fingerprints of the raw
/// certificate bytes, and the property table.
pub fn build_report(cert: &dyn CertificateInfo) -> InspectionReport {
    let data = cert.certificate_data();
    InspectionReport {
        issued_by: entity_facts(|field| cert.issuer_info(field)),
        issued_to: entity_facts(|field| cert.subject_info(field)),
        issued_on: format_timestamp(cert.validity_start()),
        expires_on: format_timestamp(cert.validity_end()),
        days_left: days_left(cert.validity_end()),
        sha1_fingerprint: digest_hex(&ring::digest::SHA1_FOR_LEGACY_USE_ONLY, &data),
        sha256_fingerprint: digest_hex(&ring::digest::SHA256, &data),
        table: build_property_table(cert),
    }
}

fn entity_facts(info: impl Fn(EntityField) -> String) -> EntityFacts {
    EntityFacts {
        common_name: info(EntityField::CommonName),
        email: info(EntityField::EmailAddress),
        organization: info(EntityField::Organization),
    }
}

fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

fn days_left(not_after: DateTime<Utc>) -> i64 {
    (not_after.timestamp() - Utc::now().timestamp()) / 86400
}

fn digest_hex(algorithm: &'static ring::digest::Algorithm, data: &[u8]) -> String {
    let digest = ring::digest::digest(algorithm, data);
    hex_with_separator(digest.as_ref(), ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StubCertificate;

    #[test]
    fn table_rows_follow_the_fixed_order() {
        let table = build_property_table(&StubCertificate::sample());
        let names: Vec<&str> = (0..table.row_count())
            .map(|row| table.property_name(row).unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "Version",
                "Serial Number",
                "Issuer",
                "Issued On",
                "Expires On",
                "Subject",
                "Public Key",
                "Key Usage"
            ]
        );
    }

    #[test]
    fn table_values_use_the_display_formats() {
        let table = build_property_table(&StubCertificate::sample());
        assert_eq!(table.property_value(0).unwrap(), "V3");
        assert_eq!(table.property_value(1).unwrap(), "ab cd 01");
        assert_eq!(table.property_value(3).unwrap(), "Aug 06 2026 18:14:24");
        assert_eq!(table.property_value(6).unwrap(), "RSA (2048 bits)");
        assert_eq!(
            table.property_value(7).unwrap(),
            "Digital Signature, Key Encipherment"
        );
    }

    #[test]
    fn every_row_has_a_value() {
        let table = build_property_table(&StubCertificate::sample());
        for row in 0..table.row_count() {
            assert!(!table.property_value(row).unwrap().is_empty());
        }
    }

    #[test]
    fn public_key_detail_is_the_raw_hex() {
        let table = build_property_table(&StubCertificate::sample());
        assert_eq!(table.detail_text(6).unwrap(), "30 82 01 0a");
        assert_eq!(table.raw_public_key_hex(), "30 82 01 0a");
        assert_ne!(table.detail_text(6).unwrap(), table.property_value(6).unwrap());
    }

    #[test]
    fn fingerprints_match_reference_vectors() {
        // SHA-1/SHA-256 of "abc"
        let report = build_report(&StubCertificate::sample().with_data(b"abc".to_vec()));
        assert_eq!(
            report.sha1_fingerprint,
            "a9 99 3e 36 47 06 81 6a ba 3e 25 71 78 50 c2 6c 9c d0 d8 9d"
        );
        assert_eq!(
            report.sha256_fingerprint,
            "ba 78 16 bf 8f 01 cf ea 41 41 40 de 5d ae 22 23 b0 03 61 a3 96 17 7a 9c b4 10 ff 61 f2 00 15 ad"
        );
    }

    #[test]
    fn report_carries_identity_facts() {
        let report = build_report(&StubCertificate::sample());
        assert_eq!(report.issued_to.common_name, "certdoc.example");
        assert_eq!(report.issued_to.email, "certs@example.com");
        assert_eq!(report.issued_to.organization, "Example Corp");
        assert_eq!(report.issued_on, "Aug 06 2026 18:14:24");
        assert_eq!(report.expires_on, "Aug 01 2046 18:14:24");
    }
}
