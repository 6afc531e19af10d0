//! Data layer between `shopsync-api` and the console surface.
//!
//! This crate owns the client-side synchronization contract with the
//! catalog service:
//!
//! - **[`EntityListController`]** — one generic controller per entity
//!   type, owning an ordered in-memory collection, a pending create
//!   draft, and an optional single-row edit session. Every successful
//!   mutation triggers a wholesale refetch; the collection is never
//!   incrementally patched from request payloads (local patches are
//!   transient echoes, overwritten by the refetch).
//!
//! - **[`CatalogEntity`] / [`MutableEntity`]** — the entity descriptors
//!   the controller is parameterized by: list fetch, required-field
//!   set, create/update/delete calls, draft seeding, and the
//!   canonical-name optimistic echo. Orders implement only the read
//!   side.
//!
//! - **[`Console`]** — the composition root: mounts the four
//!   controllers together. The product controller additionally keeps
//!   an independent manufacturer list for its create-form picklist.
//!
//! - **Domain model** ([`model`]) — canonical records
//!   ([`Product`], [`Manufacturer`], [`OptionItem`], [`Order`]) and
//!   their form drafts, keyed by integer [`EntityId`]s.

pub mod console;
pub mod controller;
pub mod convert;
pub mod entity;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use console::{Console, ProductController};
pub use controller::{ActionStatus, EditSession, EntityListController};
pub use entity::{CatalogEntity, MutableEntity};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    EntityId, Manufacturer, ManufacturerDraft, OptionDraft, OptionItem, Order, Product,
    ProductDraft, ProductOption,
};

// The API error is the only error consumers see; controllers swallow
// it internally and record the rendered message.
pub use shopsync_api::{ApiConfig, CatalogClient, Error as ApiError};
