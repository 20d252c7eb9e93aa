use super::PropertyTable;

/// Identity facts shown for the issuer and the subject of a certificate.
/// Fields the certificate does not carry are empty strings.
#[derive(Debug, Clone, Default)]
pub struct EntityFacts {
    pub common_name: String,
    pub email: String,
    pub organization: String,
}

/// Everything the inspection view presents: the summary facts plus the
/// details table. Built once; fingerprints are computed when the report is
/// built, not stored in the table.
#[derive(Debug, Clone)]
pub struct InspectionReport {
    pub issued_by: EntityFacts,
    pub issued_to: EntityFacts,
    pub issued_on: String,
    pub expires_on: String,
    pub days_left: i64,
    pub sha1_fingerprint: String,
    pub sha256_fingerprint: String,
    pub table: PropertyTable,
}

impl InspectionReport {
    pub fn is_expired(&self) -> bool {
        self.days_left < 0
    }

    pub fn expires_soon(&self) -> bool {
        (0..14).contains(&self.days_left)
    }

    pub fn short_sha256(&self) -> String {
        let parts: Vec<&str> = self.sha256_fingerprint.split(' ').collect();
        if parts.len() <= 6 {
            return self.sha256_fingerprint.clone();
        }
        format!("{} {} ... {}", parts[0], parts[1], parts[parts.len() - 1])
    }
}
