// Customer order endpoints.
//
// Orders are upstream-sourced, read-only display data: list only, and
// the route is served without the access-key header.

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{OrderCollection, OrderRecord};

impl CatalogClient {
    /// List all customer orders in server list order.
    pub async fn list_orders(&self) -> Result<Vec<OrderRecord>, Error> {
        let collection: OrderCollection = self.get_json("/api/order/", false).await?;
        Ok(collection.orders)
    }
}
