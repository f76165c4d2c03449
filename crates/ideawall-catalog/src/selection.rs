//! Part selection state with difficulty-based caps.

use crate::model::{Difficulty, PartData};
use log::debug;

/// In-memory selection of parts for the current kiosk session.
///
/// Selection is capped by difficulty (easy 1, medium 2, difficult 3).
/// Toggling an already-selected part removes it; selecting at the cap
/// evicts the oldest selection.
#[derive(Debug, Clone, Default)]
pub struct PartSelection {
    parts: Vec<PartData>,
    difficulty: Difficulty,
}

impl PartSelection {
    /// Empty selection at the default difficulty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected parts, oldest first.
    pub fn selected(&self) -> &[PartData] {
        &self.parts
    }

    /// First selected part, if any.
    pub fn first(&self) -> Option<&PartData> {
        self.parts.first()
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Replace the selection with a single part.
    pub fn set_only(&mut self, part: PartData) {
        self.parts = vec![part];
    }

    /// Toggle a part in or out of the selection.
    pub fn toggle(&mut self, part: PartData) {
        if let Some(index) = self.parts.iter().position(|selected| selected.id == part.id) {
            debug!("deselecting part (id={})", part.id);
            self.parts.remove(index);
            return;
        }
        let max_parts = self.difficulty.max_parts();
        if self.parts.len() >= max_parts {
            // At the cap the oldest selection makes room.
            self.parts.remove(0);
        }
        debug!("selecting part (id={})", part.id);
        self.parts.push(part);
    }

    /// Change difficulty, trimming the selection to the new cap.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        let max_parts = difficulty.max_parts();
        if self.parts.len() > max_parts {
            self.parts.truncate(max_parts);
        }
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.parts.clear();
    }
}
