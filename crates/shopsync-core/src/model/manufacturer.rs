use serde::Serialize;

use super::EntityId;

/// A manufacturer record.
#[derive(Debug, Clone, Serialize)]
pub struct Manufacturer {
    pub id: EntityId,
    pub name: String,
    pub image: String,
    pub description: String,
}

/// Pending form fields for a manufacturer create or update.
/// All three fields are required at the form level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManufacturerDraft {
    pub name: String,
    pub image: String,
    pub description: String,
}

impl ManufacturerDraft {
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.image.is_empty() {
            missing.push("image");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        missing
    }
}
