//! Console configuration.

use serde::Deserialize;

use jtap_types::error::{JtapError, Result};

/// Configuration for the `jtap` binary, read from `jtap.toml` (or the
/// path in `JTAP_CONFIG`). Every key is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct JtapConfig {
    /// Cable driver to attach at startup.
    #[serde(default)]
    pub default_cable: Option<String>,
    /// TCK frequency in Hz applied to the default cable.
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    /// Prompt string printed before each line read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_frequency() -> u32 {
    100_000
}

fn default_prompt() -> String {
    "jtap> ".to_string()
}

impl Default for JtapConfig {
    fn default() -> Self {
        Self {
            default_cable: None,
            frequency: default_frequency(),
            prompt: default_prompt(),
        }
    }
}

/// Parse a config TOML document.
pub fn parse_config(toml_str: &str) -> Result<JtapConfig> {
    toml::from_str(toml_str).map_err(|e| JtapError::Config(format!("jtap.toml: {e}")))
}

impl JtapConfig {
    /// Load the config from `$JTAP_CONFIG` or `./jtap.toml`; a missing
    /// file yields the defaults, a malformed one is an error.
    pub fn load() -> Result<Self> {
        let path = std::env::var("JTAP_CONFIG").unwrap_or_else(|_| "jtap.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(text) => parse_config(&text),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frequency() {
        assert_eq!(default_frequency(), 100_000);
    }

    #[test]
    fn test_default_prompt() {
        assert_eq!(default_prompt(), "jtap> ");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.default_cable.is_none());
        assert_eq!(config.frequency, 100_000);
        assert_eq!(config.prompt, "jtap> ");
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
default_cable = "sim"
frequency = 1000000
prompt = "tap> "
"#,
        )
        .unwrap();
        assert_eq!(config.default_cable.as_deref(), Some("sim"));
        assert_eq!(config.frequency, 1_000_000);
        assert_eq!(config.prompt, "tap> ");
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("default_cable = \"sim\"").unwrap();
        assert_eq!(config.default_cable.as_deref(), Some("sim"));
        assert_eq!(config.frequency, 100_000); // default
    }

    #[test]
    fn test_parse_malformed_config() {
        let result = parse_config("this is [[[not valid toml");
        assert!(result.is_err());
    }
}
