// Product: the richest catalog entity. Carries a manufacturer
// reference (resolved server-side into a display name) and an embedded
// read-only list of associated options.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::EntityId;

/// An option associated with a product. Read-only in this client —
/// option assignment happens at product creation via the selected
/// option ids, never by editing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductOption {
    pub id: EntityId,
    pub name: String,
    pub image: String,
}

/// A fully detail-resolved product record.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub sku: String,
    /// Must resolve to an existing manufacturer id at creation time
    /// (server-enforced; the client only offers existing ids).
    pub manufacturer_id: Option<EntityId>,
    pub manufacturer_name: Option<String>,
    pub quantity: u32,
    pub image: String,
    pub price: Decimal,
    pub width: f64,
    pub date_added: Option<DateTime<Utc>>,
    pub options: Vec<ProductOption>,
}

/// Pending form fields for a product create or update.
///
/// All fields except `date_added` and `selected_options` are required
/// at the form level; [`missing_required`](Self::missing_required) is
/// the programmatic stand-in for input-level requiredness and gates
/// submission before any request is issued. `date_added` is stamped
/// with the current UTC time at submission when left unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub manufacturer_id: Option<EntityId>,
    pub quantity: Option<u32>,
    pub image: String,
    pub price: Option<Decimal>,
    pub width: Option<f64>,
    pub date_added: Option<DateTime<Utc>>,
    pub selected_options: Vec<EntityId>,
}

impl ProductDraft {
    /// Names of required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.sku.is_empty() {
            missing.push("sku");
        }
        if self.manufacturer_id.is_none() {
            missing.push("manufacturer");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }
        if self.image.is_empty() {
            missing.push("image");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.width.is_none() {
            missing.push("width");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            name: "RB3357".into(),
            description: "Ray Ban RB3357 Sunglass".into(),
            sku: "RBX335700000006B".into(),
            manufacturer_id: Some(EntityId(1)),
            quantity: Some(1000),
            image: "/image/products/RB3357.jpg".into(),
            price: Decimal::new(3955, 2).into(),
            width: Some(3.0),
            date_added: None,
            selected_options: Vec::new(),
        }
    }

    #[test]
    fn complete_draft_has_no_missing_fields() {
        assert!(filled_draft().missing_required().is_empty());
    }

    #[test]
    fn unchosen_manufacturer_blocks_submission() {
        let mut draft = filled_draft();
        draft.manufacturer_id = None;
        assert_eq!(draft.missing_required(), vec!["manufacturer"]);
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let missing = ProductDraft::default().missing_required();
        assert_eq!(missing.len(), 8);
        assert!(missing.contains(&"sku"));
        // date_added and selected_options are not required
        assert!(!missing.contains(&"date_added"));
    }
}
