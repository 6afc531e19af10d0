use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A customer order: read-only, upstream-sourced display data.
///
/// Orders carry no id on the wire and support no create, update, or
/// delete operations in this client.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub firstname: String,
    pub email: String,
    pub telephone: String,
    pub payment_address_1: String,
    pub payment_city: String,
    pub payment_postcode: String,
    pub payment_country: String,
    pub total: Decimal,
    pub date_added: Option<DateTime<Utc>>,
}
