/// Decoded key usage extension flags.
///
/// An absent extension decodes to the empty set, which renders as an empty
/// string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyUsageSet {
    pub digital_signature: bool,
    pub non_repudiation: bool,
    pub key_encipherment: bool,
    pub data_encipherment: bool,
    pub key_agreement: bool,
    pub certificate_signing: bool,
    pub crl_signing: bool,
    pub encipher_only: bool,
    pub decipher_only: bool,
}

impl KeyUsageSet {
    pub fn is_empty(&self) -> bool {
        !(self.digital_signature
            || self.non_repudiation
            || self.key_encipherment
            || self.data_encipherment
            || self.key_agreement
            || self.certificate_signing
            || self.crl_signing
            || self.encipher_only
            || self.decipher_only)
    }

    /// Human-readable list of the active flags, joined with ", ".
    pub fn readable(&self) -> String {
        let mut names: Vec<&'static str> = Vec::new();
        if self.digital_signature { names.push("Digital Signature"); }
        if self.non_repudiation { names.push("Non-Repudiation"); }
        if self.key_encipherment { names.push("Key Encipherment"); }
        if self.data_encipherment { names.push("Data Encipherment"); }
        if self.key_agreement { names.push("Key Agreement"); }
        if self.certificate_signing { names.push("Certificate Signing"); }
        if self.crl_signing { names.push("CRL Signing"); }
        if self.encipher_only { names.push("Encipher Only"); }
        if self.decipher_only { names.push("Decipher Only"); }
        names.join(", ")
    }
}
