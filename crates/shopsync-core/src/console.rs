// ── Composition root ──
//
// Mounts the four entity controllers together. The controllers share
// nothing except the HTTP client; in particular the product controller
// and the manufacturer controller each keep an independent copy of the
// manufacturer collection, so the two may transiently disagree after a
// manufacturer edit until both refresh.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tracing::warn;

use shopsync_api::CatalogClient;

use crate::controller::EntityListController;
use crate::entity::CatalogEntity;
use crate::model::{Manufacturer, OptionItem, Order, Product};

/// Product controller specialization.
///
/// On top of the generic pattern, every refresh also loads the full
/// manufacturer collection — independently of the manufacturer
/// controller — solely to populate the create-form manufacturer
/// picklist. Product creation requires a manufacturer id chosen from
/// this list.
pub struct ProductController {
    list: EntityListController<Product>,
    manufacturer_choices: Vec<Manufacturer>,
}

impl ProductController {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            list: EntityListController::new(client),
            manufacturer_choices: Vec::new(),
        }
    }

    /// Refresh the product collection, then the manufacturer picklist.
    pub async fn refresh(&mut self) -> bool {
        let ok = self.list.refresh().await;

        match Manufacturer::list(self.list.client()).await {
            Ok(choices) => self.manufacturer_choices = choices,
            Err(e) => warn!(error = %e, "manufacturer picklist fetch failed"),
        }

        ok
    }

    /// Manufacturers available in the create-form selection control.
    pub fn manufacturer_choices(&self) -> &[Manufacturer] {
        &self.manufacturer_choices
    }
}

impl Deref for ProductController {
    type Target = EntityListController<Product>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for ProductController {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}

/// The admin console: all four entity controllers mounted together.
pub struct Console {
    pub products: ProductController,
    pub manufacturers: EntityListController<Manufacturer>,
    pub options: EntityListController<OptionItem>,
    pub orders: EntityListController<Order>,
}

impl Console {
    pub fn new(client: CatalogClient) -> Self {
        let client = Arc::new(client);
        Self {
            products: ProductController::new(Arc::clone(&client)),
            manufacturers: EntityListController::new(Arc::clone(&client)),
            options: EntityListController::new(Arc::clone(&client)),
            orders: EntityListController::new(client),
        }
    }

    /// Mount-time load: fetch all four collections concurrently.
    pub async fn refresh_all(&mut self) {
        tokio::join!(
            self.products.refresh(),
            self.manufacturers.refresh(),
            self.options.refresh(),
            self.orders.refresh(),
        );
    }
}
