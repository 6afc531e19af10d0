// Wire → domain conversions.
//
// The service is loose about absent fields and renders timestamps two
// ways: `YYYY-MM-DD HH:MM:SS` on reads (no offset, implicitly UTC) and
// RFC-3339 with an explicit `+00:00` on client-written records. Parsing
// accepts both; writing always emits the explicit-offset form.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use shopsync_api::models::{
    ManufacturerRecord, OptionRecord, OrderRecord, ProductOptionRecord, ProductRecord,
};

use crate::model::{EntityId, Manufacturer, OptionItem, Order, Product, ProductOption};

/// Parse a server timestamp, RFC-3339 or the bare `YYYY-MM-DD HH:MM:SS`
/// rendering. Returns `None` for anything else rather than failing the
/// record.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a client-generated creation timestamp: UTC, second precision,
/// explicit `+00:00` offset.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn optional_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_timestamp)
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: EntityId(record.id),
            name: record.name.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            sku: record.sku.unwrap_or_default(),
            manufacturer_id: record.manufacturer_id.map(EntityId),
            manufacturer_name: record.manufacturer_name,
            quantity: record.quantity.unwrap_or_default(),
            image: record.image.unwrap_or_default(),
            price: record.price.unwrap_or_default(),
            width: record.width.unwrap_or_default(),
            date_added: optional_timestamp(record.date_added.as_deref()),
            options: record.options.into_iter().map(ProductOption::from).collect(),
        }
    }
}

impl From<ProductOptionRecord> for ProductOption {
    fn from(record: ProductOptionRecord) -> Self {
        Self {
            id: EntityId(record.id),
            name: record.name.unwrap_or_default(),
            image: record.image.unwrap_or_default(),
        }
    }
}

impl From<ManufacturerRecord> for Manufacturer {
    fn from(record: ManufacturerRecord) -> Self {
        Self {
            id: EntityId(record.id),
            name: record.name.unwrap_or_default(),
            image: record.image.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
        }
    }
}

impl From<OptionRecord> for OptionItem {
    fn from(record: OptionRecord) -> Self {
        Self {
            id: EntityId(record.id),
            name: record.name.unwrap_or_default(),
            image: record.image.unwrap_or_default(),
        }
    }
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            firstname: record.firstname.unwrap_or_default(),
            email: record.email.unwrap_or_default(),
            telephone: record.telephone.unwrap_or_default(),
            payment_address_1: record.payment_address_1.unwrap_or_default(),
            payment_city: record.payment_city.unwrap_or_default(),
            payment_postcode: record.payment_postcode.unwrap_or_default(),
            payment_country: record.payment_country.unwrap_or_default(),
            total: record.total.unwrap_or(Decimal::ZERO),
            date_added: optional_timestamp(record.date_added.as_deref()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2023-02-27T02:14:38+00:00").unwrap();
        assert_eq!(dt.to_rfc3339_opts(SecondsFormat::Secs, false), "2023-02-27T02:14:38+00:00");
    }

    #[test]
    fn parses_server_space_separated_rendering() {
        let dt = parse_timestamp("2023-02-27 02:14:38").unwrap();
        assert_eq!(format_timestamp(dt), "2023-02-27T02:14:38+00:00");
    }

    #[test]
    fn rejects_garbage_without_failing() {
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn formats_with_explicit_utc_offset() {
        let dt = parse_timestamp("2019-02-27T02:14:38+00:00").unwrap();
        let formatted = format_timestamp(dt);
        assert!(formatted.ends_with("+00:00"), "expected explicit offset: {formatted}");
    }
}
