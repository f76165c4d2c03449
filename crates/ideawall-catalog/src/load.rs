//! Parts catalog loading and validation.

use crate::error::CatalogError;
use crate::model::PartData;
use log::{info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Valid layout priority range.
const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=4;

/// The kiosk's static parts catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartsCatalog {
    parts: Vec<PartData>,
}

/// On-disk catalog document shape.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    parts: Vec<PartData>,
}

impl PartsCatalog {
    /// Load a catalog from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        info!("loading parts catalog from: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a catalog from JSON5 contents.
    ///
    /// Duplicate ids keep the first occurrence; out-of-range priorities
    /// and empty ids reject the whole catalog.
    pub fn load_from_str(contents: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = json5::from_str(contents)?;
        let document: CatalogDocument = serde_json::from_value(value)?;

        let mut seen = HashSet::new();
        let mut parts = Vec::new();
        for part in document.parts {
            if part.id.trim().is_empty() {
                return Err(CatalogError::InvalidPart {
                    id: part.id,
                    message: "id must not be empty".to_string(),
                });
            }
            if !PRIORITY_RANGE.contains(&part.priority) {
                return Err(CatalogError::InvalidPart {
                    id: part.id,
                    message: format!("priority {} outside 1..=4", part.priority),
                });
            }
            if !seen.insert(part.id.clone()) {
                warn!("skipping duplicate part (id={})", part.id);
                continue;
            }
            parts.push(part);
        }
        info!("parts catalog loaded (count={})", parts.len());
        Ok(Self { parts })
    }

    /// All parts in catalog order.
    pub fn parts(&self) -> &[PartData] {
        &self.parts
    }

    /// Look up a part by id.
    pub fn find(&self, id: &str) -> Option<&PartData> {
        self.parts.iter().find(|part| part.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::PartsCatalog;
    use crate::error::CatalogError;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        parts: [
            { id: "blade", name: "Blade", description: "Rotor blade",
              icon: "icons/blade.svg", priority: 1, tags: ["composite"] },
            { id: "hub", name: "Hub", description: "Rotor hub",
              icon: "icons/hub.svg", priority: 2 },
            // duplicate id: first occurrence wins
            { id: "blade", name: "Blade copy", description: "dup",
              icon: "icons/blade.svg", priority: 3 },
        ],
    }"#;

    #[test]
    fn loads_and_dedups_by_id() {
        let catalog = PartsCatalog::load_from_str(SAMPLE).expect("catalog");
        assert_eq!(catalog.parts().len(), 2);
        assert_eq!(catalog.find("blade").expect("blade").name, "Blade");
        assert_eq!(catalog.find("hub").expect("hub").priority, 2);
    }

    #[test]
    fn rejects_out_of_range_priority() {
        let err = PartsCatalog::load_from_str(
            r#"{ parts: [{ id: "x", name: "X", description: "", icon: "", priority: 5 }] }"#,
        )
        .expect_err("invalid priority");
        let CatalogError::InvalidPart { id, .. } = err else {
            panic!("expected invalid part");
        };
        assert_eq!(id, "x");
    }

    #[test]
    fn rejects_empty_id() {
        let err = PartsCatalog::load_from_str(
            r#"{ parts: [{ id: " ", name: "X", description: "", icon: "", priority: 1 }] }"#,
        )
        .expect_err("empty id");
        assert!(matches!(err, CatalogError::InvalidPart { .. }));
    }

    #[test]
    fn missing_find_returns_none() {
        let catalog = PartsCatalog::load_from_str(r#"{ parts: [] }"#).expect("catalog");
        assert_eq!(catalog.find("nacelle"), None);
    }
}
