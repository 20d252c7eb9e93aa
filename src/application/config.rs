/// Runtime configuration, read from the environment the same way every
/// other knob of this tool is.
pub struct Config {
    pub export_name: String,
    pub export_extension: String,
    pub json_output: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            export_name: parse_string_env("CERTDOC_EXPORT_NAME", "Certificate.cer"),
            export_extension: parse_string_env("CERTDOC_EXPORT_EXT", "cer"),
            json_output: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_string_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
