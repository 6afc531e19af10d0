use serde::Serialize;

use super::EntityId;

/// A product option (e.g. a lens color) that products can be associated
/// with at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct OptionItem {
    pub id: EntityId,
    pub name: String,
    pub image: String,
}

/// Pending form fields for an option create or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionDraft {
    pub name: String,
    pub image: String,
}

impl OptionDraft {
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.image.is_empty() {
            missing.push("image");
        }
        missing
    }
}
