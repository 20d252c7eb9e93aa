use std::path::Path;

use crate::domain::CertdocError;

/// Reads a certificate file and returns its DER bytes.
pub fn load_certificate(path: &Path) -> Result<Vec<u8>, CertdocError> {
    let raw = std::fs::read(path)
        .map_err(|e| CertdocError::input(format!("cannot read {}: {}", path.display(), e)))?;
    log::debug!("read {} bytes from {}", raw.len(), path.display());
    decode_certificate(raw)
}

/// PEM input is unwrapped to its DER contents; anything else is assumed to
/// already be DER.
pub fn decode_certificate(raw: Vec<u8>) -> Result<Vec<u8>, CertdocError> {
    if !raw.starts_with(b"-----BEGIN") {
        return Ok(raw);
    }
    let (_, pem) = x509_parser::pem::parse_x509_pem(&raw)
        .map_err(|e| CertdocError::cert(format!("invalid PEM: {}", e)))?;
    log::debug!("decoded PEM block into {} bytes of DER", pem.contents.len());
    Ok(pem.contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorClass;

    const FIXTURE_PEM: &[u8] = include_bytes!("../../tests/data/cert.pem");
    const FIXTURE_DER: &[u8] = include_bytes!("../../tests/data/cert.der");

    #[test]
    fn pem_decodes_to_der() {
        let der = decode_certificate(FIXTURE_PEM.to_vec()).unwrap();
        assert_eq!(der, FIXTURE_DER);
    }

    #[test]
    fn der_passes_through_verbatim() {
        let der = decode_certificate(FIXTURE_DER.to_vec()).unwrap();
        assert_eq!(der, FIXTURE_DER);
    }

    #[test]
    fn truncated_pem_is_a_cert_error() {
        let err = decode_certificate(b"-----BEGIN CERTIFICATE-----\ngarbage".to_vec()).unwrap_err();
        assert_eq!(err.class, ErrorClass::Cert);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = load_certificate(Path::new("/nonexistent/cert.pem")).unwrap_err();
        assert_eq!(err.class, ErrorClass::Input);
    }
}
