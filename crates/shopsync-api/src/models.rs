// Wire types for the catalog REST API.
//
// The service speaks a loose Mason-flavored JSON dialect: collections
// arrive under entity-specific keys (`products`, `items`, `options`,
// `orders`), product and manufacturer summaries carry `@controls`
// hypermedia maps pointing at their detail routes, and the manufacturer
// detail nests its record as a single-element sequence. Everything here
// is deserialized tolerantly — unknown fields ignored, most values
// optional — so a schema drift on the server degrades a field, not the
// whole collection.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ── Hypermedia controls ─────────────────────────────────────────────

/// A single Mason control: `{"href": "...", "method": ..., "title": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Control {
    pub href: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// The `@controls` map attached to collection summaries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Controls(pub HashMap<String, Control>);

impl Controls {
    /// Look up the href for a relation, e.g. `self` or `storage:manufacturer`.
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.0.get(rel).map(|c| c.href.as_str())
    }
}

// ── Products ────────────────────────────────────────────────────────

/// Collection entry: id + name + the `self` link used for detail resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "@controls", default)]
    pub controls: Controls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCollection {
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

/// An option embedded in a product detail record (read-only). The wire
/// names carry an `option_` prefix to distinguish them from the parent
/// product's own fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOptionRecord {
    #[serde(rename = "option_id")]
    pub id: i64,
    #[serde(rename = "option_name", default)]
    pub name: Option<String>,
    #[serde(rename = "option_image", default)]
    pub image: Option<String>,
}

/// Fully resolved product record, as served by the detail route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manufacturer_id: Option<i64>,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub width: Option<f64>,
    /// Raw timestamp string — the server renders `YYYY-MM-DD HH:MM:SS`
    /// while clients write RFC-3339; `shopsync-core` parses both.
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub options: Vec<ProductOptionRecord>,
}

/// Create payload. Field names match the POST contract, including the
/// camelCase `manufacturerId` and the `selectedOptions` id list the
/// server requires (empty when no options are attached at creation).
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub sku: String,
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: i64,
    pub quantity: u32,
    pub image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub width: f64,
    /// Client-generated at creation time, UTC, RFC-3339 with an explicit
    /// `+00:00` offset.
    pub date_added: String,
    #[serde(rename = "selectedOptions")]
    pub selected_options: Vec<i64>,
}

/// Update payload. Uses the same canonical field names as create/read;
/// the manufacturer reference and creation timestamp are not editable.
#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub quantity: u32,
    pub image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub width: f64,
}

// ── Manufacturers ───────────────────────────────────────────────────

/// Collection entry. Summaries omit the id and image — both only appear
/// in the detail record behind the `storage:manufacturer` link.
#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "@controls", default)]
    pub controls: Controls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerCollection {
    #[serde(default)]
    pub items: Vec<ManufacturerSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Detail envelope: the record arrives nested one level down, as a
/// single-element sequence under a `manufacturer` key.
#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerDetail {
    #[serde(default)]
    pub manufacturer: Vec<ManufacturerRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewManufacturer {
    pub name: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManufacturerUpdate {
    pub name: String,
    pub description: String,
    pub image: String,
}

// ── Options ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionCollection {
    #[serde(default)]
    pub options: Vec<OptionRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOption {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionUpdate {
    pub name: String,
    pub image: String,
}

// ── Orders ──────────────────────────────────────────────────────────

/// Read-only customer order. Served without hypermedia controls and
/// without an id; the collection is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub payment_address_1: Option<String>,
    #[serde(default)]
    pub payment_city: Option<String>,
    #[serde(default)]
    pub payment_postcode: Option<String>,
    #[serde(default)]
    pub payment_country: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub date_added: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderCollection {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}
