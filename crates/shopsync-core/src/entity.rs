// ── Entity descriptors ──
//
// The generic controller is parameterized by these traits instead of
// being written four times. `CatalogEntity` is the read side shared by
// every entity; `MutableEntity` adds the form/draft machinery and the
// create/update/delete calls. Orders implement only the read side.

use std::future::Future;

use chrono::Utc;

use shopsync_api::models::{
    ManufacturerUpdate, NewManufacturer, NewOption, NewProduct, OptionUpdate, ProductUpdate,
};
use shopsync_api::{CatalogClient, Error as ApiError};

use crate::convert::format_timestamp;
use crate::model::{
    EntityId, Manufacturer, ManufacturerDraft, OptionDraft, OptionItem, Order, Product,
    ProductDraft,
};

/// The read side of a catalog entity: how to fetch its collection.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Label used in logs and user-facing confirmations.
    const LABEL: &'static str;

    /// Pending-form type. `()` for read-only entities.
    type Draft: Clone + Default + Send + Sync + 'static;

    /// Fetch the full collection in server list order.
    fn list(client: &CatalogClient) -> impl Future<Output = Result<Vec<Self>, ApiError>> + Send;
}

/// The write side: drafts, requiredness, mutations, and the optimistic
/// echo applied between a successful update and its authoritative
/// refetch.
pub trait MutableEntity: CatalogEntity {
    fn id(&self) -> EntityId;

    /// Names of required form fields currently empty — the programmatic
    /// stand-in for input-level requiredness. A non-empty result blocks
    /// submission before any request is issued.
    fn missing_required(draft: &Self::Draft) -> Vec<&'static str>;

    fn create(
        client: &CatalogClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update(
        client: &CatalogClient,
        id: EntityId,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(
        client: &CatalogClient,
        id: EntityId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Seed an edit draft from the record's current values.
    fn seed_draft(&self) -> Self::Draft;

    /// Best-effort local echo of a submitted edit, using the same
    /// canonical field names as the record itself. Transient: the
    /// post-update refetch overwrites it wholesale.
    fn apply_draft(&self, draft: &Self::Draft) -> Self;
}

// ── Product ─────────────────────────────────────────────────────────

impl CatalogEntity for Product {
    const LABEL: &'static str = "product";
    type Draft = ProductDraft;

    fn list(client: &CatalogClient) -> impl Future<Output = Result<Vec<Self>, ApiError>> + Send {
        async move {
            let records = client.list_products().await?;
            Ok(records.into_iter().map(Product::from).collect())
        }
    }
}

impl MutableEntity for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn missing_required(draft: &Self::Draft) -> Vec<&'static str> {
        draft.missing_required()
    }

    fn create(
        client: &CatalogClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let payload = NewProduct {
            name: draft.name.clone(),
            description: draft.description.clone(),
            sku: draft.sku.clone(),
            manufacturer_id: draft.manufacturer_id.map(EntityId::as_i64).unwrap_or_default(),
            quantity: draft.quantity.unwrap_or_default(),
            image: draft.image.clone(),
            price: draft.price.unwrap_or_default(),
            width: draft.width.unwrap_or_default(),
            // Client-generated creation timestamp, stamped at submission
            // when the form left it unset.
            date_added: format_timestamp(draft.date_added.unwrap_or_else(Utc::now)),
            selected_options: draft.selected_options.iter().map(|id| id.as_i64()).collect(),
        };
        async move { client.create_product(&payload).await }
    }

    fn update(
        client: &CatalogClient,
        id: EntityId,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let payload = ProductUpdate {
            name: draft.name.clone(),
            description: draft.description.clone(),
            sku: draft.sku.clone(),
            quantity: draft.quantity.unwrap_or_default(),
            image: draft.image.clone(),
            price: draft.price.unwrap_or_default(),
            width: draft.width.unwrap_or_default(),
        };
        async move { client.update_product(id.as_i64(), &payload).await }
    }

    fn delete(
        client: &CatalogClient,
        id: EntityId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        client.delete_product(id.as_i64())
    }

    fn seed_draft(&self) -> Self::Draft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            sku: self.sku.clone(),
            // The manufacturer reference and creation timestamp are not
            // editable; seeding them keeps the draft complete.
            manufacturer_id: self.manufacturer_id,
            quantity: Some(self.quantity),
            image: self.image.clone(),
            price: Some(self.price),
            width: Some(self.width),
            date_added: self.date_added,
            selected_options: Vec::new(),
        }
    }

    fn apply_draft(&self, draft: &Self::Draft) -> Self {
        let mut patched = self.clone();
        patched.name = draft.name.clone();
        patched.description = draft.description.clone();
        patched.sku = draft.sku.clone();
        patched.quantity = draft.quantity.unwrap_or(self.quantity);
        patched.image = draft.image.clone();
        patched.price = draft.price.unwrap_or(self.price);
        patched.width = draft.width.unwrap_or(self.width);
        patched
    }
}

// ── Manufacturer ────────────────────────────────────────────────────

impl CatalogEntity for Manufacturer {
    const LABEL: &'static str = "manufacturer";
    type Draft = ManufacturerDraft;

    fn list(client: &CatalogClient) -> impl Future<Output = Result<Vec<Self>, ApiError>> + Send {
        async move {
            let records = client.list_manufacturers().await?;
            Ok(records.into_iter().map(Manufacturer::from).collect())
        }
    }
}

impl MutableEntity for Manufacturer {
    fn id(&self) -> EntityId {
        self.id
    }

    fn missing_required(draft: &Self::Draft) -> Vec<&'static str> {
        draft.missing_required()
    }

    fn create(
        client: &CatalogClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let payload = NewManufacturer {
            name: draft.name.clone(),
            image: draft.image.clone(),
            description: draft.description.clone(),
        };
        async move { client.create_manufacturer(&payload).await }
    }

    fn update(
        client: &CatalogClient,
        id: EntityId,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let payload = ManufacturerUpdate {
            name: draft.name.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
        };
        async move { client.update_manufacturer(id.as_i64(), &payload).await }
    }

    fn delete(
        client: &CatalogClient,
        id: EntityId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        client.delete_manufacturer(id.as_i64())
    }

    fn seed_draft(&self) -> Self::Draft {
        ManufacturerDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
        }
    }

    fn apply_draft(&self, draft: &Self::Draft) -> Self {
        Self {
            id: self.id,
            name: draft.name.clone(),
            image: draft.image.clone(),
            description: draft.description.clone(),
        }
    }
}

// ── Option ──────────────────────────────────────────────────────────

impl CatalogEntity for OptionItem {
    const LABEL: &'static str = "option";
    type Draft = OptionDraft;

    fn list(client: &CatalogClient) -> impl Future<Output = Result<Vec<Self>, ApiError>> + Send {
        async move {
            let records = client.list_options().await?;
            Ok(records.into_iter().map(OptionItem::from).collect())
        }
    }
}

impl MutableEntity for OptionItem {
    fn id(&self) -> EntityId {
        self.id
    }

    fn missing_required(draft: &Self::Draft) -> Vec<&'static str> {
        draft.missing_required()
    }

    fn create(
        client: &CatalogClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let payload = NewOption {
            name: draft.name.clone(),
            image: draft.image.clone(),
        };
        async move { client.create_option(&payload).await }
    }

    fn update(
        client: &CatalogClient,
        id: EntityId,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let payload = OptionUpdate {
            name: draft.name.clone(),
            image: draft.image.clone(),
        };
        async move { client.update_option(id.as_i64(), &payload).await }
    }

    fn delete(
        client: &CatalogClient,
        id: EntityId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        client.delete_option(id.as_i64())
    }

    fn seed_draft(&self) -> Self::Draft {
        OptionDraft {
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }

    fn apply_draft(&self, draft: &Self::Draft) -> Self {
        Self {
            id: self.id,
            name: draft.name.clone(),
            image: draft.image.clone(),
        }
    }
}

// ── Order (read-only) ───────────────────────────────────────────────

impl CatalogEntity for Order {
    const LABEL: &'static str = "order";
    type Draft = ();

    fn list(client: &CatalogClient) -> impl Future<Output = Result<Vec<Self>, ApiError>> + Send {
        async move {
            let records = client.list_orders().await?;
            Ok(records.into_iter().map(Order::from).collect())
        }
    }
}
