//! Configuration schema models.

use serde::{Deserialize, Serialize};

/// Top-level kiosk configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdeawallConfig {
    /// Remote archive settings.
    #[serde(default)]
    pub archive: ArchiveConfig,
    /// Static parts catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the remote conversation archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Base URL of the store; the document lives at `{base_url}/data.json`.
    #[serde(default)]
    pub base_url: String,
    /// Page size for the history view.
    #[serde(default = "default_previous_limit")]
    pub previous_limit: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            previous_limit: default_previous_limit(),
        }
    }
}

/// Settings for the static parts catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to the parts catalog file, when the kiosk ships one.
    #[serde(default)]
    pub path: Option<String>,
}

fn default_previous_limit() -> usize {
    6
}
