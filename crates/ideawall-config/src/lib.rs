//! Configuration models and JSON5 config loading.
//!
//! This crate owns the ideawall config schema and validation used by the
//! kiosk binary.

mod error;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::*;

use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

impl IdeawallConfig {
    /// Load a config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        let config: IdeawallConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.archive.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "archive.base_url is required".to_string(),
            ));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "archive.base_url must be an http(s) URL".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, IdeawallConfig};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn loads_minimal_config_with_defaults() {
        let config = IdeawallConfig::load_from_str(
            r#"{ archive: { base_url: "https://store.example" } }"#,
        )
        .expect("config");
        assert_eq!(config.archive.base_url, "https://store.example");
        assert_eq!(config.archive.previous_limit, 6);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn loads_full_config_from_a_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("ideawall.json5");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(
            file,
            r#"{{
                // kiosk deployment settings
                archive: {{ base_url: "https://store.example", previous_limit: 3 }},
                catalog: {{ path: "parts.json5" }},
            }}"#
        )
        .expect("write");

        let config = IdeawallConfig::load_from_path(&path).expect("config");
        assert_eq!(config.archive.previous_limit, 3);
        assert_eq!(config.catalog.path.as_deref(), Some("parts.json5"));
    }

    #[test]
    fn rejects_missing_base_url() {
        let err = IdeawallConfig::load_from_str("{}").expect_err("invalid");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err =
            IdeawallConfig::load_from_str(r#"{ archive: { base_url: "store.example" } }"#)
                .expect_err("invalid");
        let ConfigError::Invalid(message) = err else {
            panic!("expected invalid");
        };
        assert_eq!(message, "archive.base_url must be an http(s) URL");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = IdeawallConfig::load_from_str(
            r#"{ archive: { base_url: "https://store.example" }, telemetry: {} }"#,
        )
        .expect_err("unknown field");
        assert!(matches!(err, ConfigError::DecodeFailed(_)));
    }

    #[test]
    fn zero_previous_limit_is_legal() {
        let config = IdeawallConfig::load_from_str(
            r#"{ archive: { base_url: "https://store.example", previous_limit: 0 } }"#,
        )
        .expect("config");
        assert_eq!(config.archive.previous_limit, 0);
    }
}
