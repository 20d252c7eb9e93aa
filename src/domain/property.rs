use super::CertdocError;

/// The table always has exactly these eight rows, in this order.
pub const PROPERTY_ROWS: usize = 8;
pub const PROPERTY_COLUMNS: usize = 2;

/// One row of the property table: a display name/value pair.
///
/// A row may carry a raw detail payload. When it does, the detail pane shows
/// that payload instead of the display value (the Public Key row carries the
/// hex-encoded raw key while its display value is the readable algorithm
/// summary).
#[derive(Debug, Clone)]
pub struct CertificateProperty {
    pub name: String,
    pub value: String,
    pub detail: Option<String>,
}

impl CertificateProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), detail: None }
    }

    pub fn with_detail(name: impl Into<String>, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), detail: Some(detail.into()) }
    }
}

/// Fixed-size, read-only projection of a certificate's display properties.
///
/// Built once from the certificate; every value is a copied string and the
/// certificate is never re-read afterwards. Row indices are stable for the
/// table's lifetime.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    rows: [CertificateProperty; PROPERTY_ROWS],
    raw_public_key_hex: String,
}

impl PropertyTable {
    pub fn new(rows: [CertificateProperty; PROPERTY_ROWS], raw_public_key_hex: String) -> Self {
        Self { rows, raw_public_key_hex }
    }

    pub fn row_count(&self) -> usize {
        PROPERTY_ROWS
    }

    pub fn column_count(&self) -> usize {
        PROPERTY_COLUMNS
    }

    pub fn rows(&self) -> &[CertificateProperty] {
        &self.rows
    }

    /// Cell accessor: column 0 is the property name, column 1 the display
    /// value. Out-of-range rows and columns are programmer errors and fail
    /// loudly instead of returning an empty cell.
    pub fn get(&self, row: usize, column: usize) -> Result<&str, CertdocError> {
        let entry = self.row(row)?;
        match column {
            0 => Ok(&entry.name),
            1 => Ok(&entry.value),
            _ => Err(CertdocError::range(format!(
                "column {} out of range (0..{})",
                column, PROPERTY_COLUMNS
            ))),
        }
    }

    pub fn property_name(&self, row: usize) -> Result<&str, CertdocError> {
        Ok(&self.row(row)?.name)
    }

    pub fn property_value(&self, row: usize) -> Result<&str, CertdocError> {
        Ok(&self.row(row)?.value)
    }

    /// Side-channel value: the certificate's raw public key bytes, hex
    /// encoded. A property of the whole table, independent of row
    /// addressing; the UI binds it to the Public Key row via that row's
    /// detail payload.
    pub fn raw_public_key_hex(&self) -> &str {
        &self.raw_public_key_hex
    }

    /// Selection protocol: the text the detail pane shows for a selected
    /// row. Rows with a raw detail payload yield it verbatim; all other
    /// rows yield the display value with every comma replaced by a line
    /// break and every other character preserved.
    pub fn detail_text(&self, row: usize) -> Result<String, CertdocError> {
        let entry = self.row(row)?;
        match &entry.detail {
            Some(raw) => Ok(raw.clone()),
            None => Ok(comma_to_newline(&entry.value)),
        }
    }

    fn row(&self, row: usize) -> Result<&CertificateProperty, CertdocError> {
        self.rows.get(row).ok_or_else(|| {
            CertdocError::range(format!("row {} out of range (0..{})", row, PROPERTY_ROWS))
        })
    }
}

fn comma_to_newline(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == ',' { '\n' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorClass;

    fn sample_table() -> PropertyTable {
        let rows = [
            CertificateProperty::new("Version", "V3"),
            CertificateProperty::new("Serial Number", "ab cd 01"),
            CertificateProperty::new("Issuer", "US,California,Example Corp"),
            CertificateProperty::new("Issued On", "Aug 06 2026 18:14:24"),
            CertificateProperty::new("Expires On", "Aug 01 2046 18:14:24"),
            CertificateProperty::new("Subject", "US,California,Example Corp"),
            CertificateProperty::with_detail("Public Key", "RSA (2048 bits)", "30 82 01 0a"),
            CertificateProperty::new("Key Usage", "Digital Signature, Key Encipherment"),
        ];
        PropertyTable::new(rows, "30 82 01 0a".to_string())
    }

    #[test]
    fn table_shape_is_fixed() {
        let table = sample_table();
        assert_eq!(table.row_count(), 8);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn cells_address_name_and_value() {
        let table = sample_table();
        assert_eq!(table.get(0, 0).unwrap(), "Version");
        assert_eq!(table.get(0, 1).unwrap(), "V3");
        assert_eq!(table.get(1, 1).unwrap(), "ab cd 01");
        assert_eq!(table.property_name(7).unwrap(), "Key Usage");
        assert_eq!(table.property_value(6).unwrap(), "RSA (2048 bits)");
    }

    #[test]
    fn out_of_range_row_fails_loudly() {
        let table = sample_table();
        let err = table.get(8, 0).unwrap_err();
        assert_eq!(err.class, ErrorClass::Range);
        assert!(table.property_name(8).is_err());
        assert!(table.property_value(100).is_err());
        assert!(table.detail_text(8).is_err());
    }

    #[test]
    fn out_of_range_column_fails_loudly() {
        let table = sample_table();
        let err = table.get(0, 2).unwrap_err();
        assert_eq!(err.class, ErrorClass::Range);
    }

    #[test]
    fn detail_text_replaces_commas_with_newlines() {
        let table = sample_table();
        assert_eq!(
            table.detail_text(2).unwrap(),
            "US\nCalifornia\nExample Corp"
        );
        // non-comma characters are untouched
        assert_eq!(table.detail_text(0).unwrap(), "V3");
    }

    #[test]
    fn detail_text_keeps_spaces_after_commas() {
        let table = sample_table();
        assert_eq!(
            table.detail_text(7).unwrap(),
            "Digital Signature\n Key Encipherment"
        );
    }

    #[test]
    fn public_key_row_yields_raw_hex_not_display_value() {
        let table = sample_table();
        let detail = table.detail_text(6).unwrap();
        assert_eq!(detail, "30 82 01 0a");
        assert_ne!(detail, table.property_value(6).unwrap());
        assert_eq!(table.raw_public_key_hex(), "30 82 01 0a");
    }
}
