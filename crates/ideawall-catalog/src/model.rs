//! Catalog models.

use serde::{Deserialize, Serialize};

/// One selectable turbine part shown on the parts view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartData {
    /// Unique part identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown on the part card.
    pub description: String,
    /// Icon asset path or URL.
    pub icon: String,
    /// Layout priority, 1 (largest) through 4 (smallest).
    pub priority: u8,
    /// Free-form tags for grouping.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Session difficulty, which caps how many parts can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One part.
    Easy,
    /// Two parts.
    Medium,
    /// Three parts.
    Difficult,
}

impl Difficulty {
    /// Maximum number of simultaneously selected parts.
    pub fn max_parts(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Difficult => 3,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}
