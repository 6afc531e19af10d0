// Canonical domain model. One file per entity, plus the shared id type.

mod entity_id;
mod manufacturer;
mod option;
mod order;
mod product;

pub use entity_id::EntityId;
pub use manufacturer::{Manufacturer, ManufacturerDraft};
pub use option::{OptionDraft, OptionItem};
pub use order::Order;
pub use product::{Product, ProductDraft, ProductOption};
