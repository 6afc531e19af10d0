// Product endpoints.
//
// The collection route returns summaries; every summary must be
// resolved through its `self` link before the collection is exposed.
// Detail fetches run concurrently with no ordering dependency among
// them, and the final sequence keeps the server's summary order.

use futures_util::future::join_all;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{NewProduct, ProductCollection, ProductRecord, ProductUpdate};

const COLLECTION: &str = "/api/product/";

impl CatalogClient {
    /// List all products, fully detail-resolved, in server list order.
    ///
    /// Fails if any summary lacks its `self` link or any detail fetch
    /// fails — a partially resolved collection is never returned.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, Error> {
        let collection: ProductCollection = self.get_json(COLLECTION, true).await?;

        let details = collection.products.iter().map(|summary| async move {
            let href = summary.controls.link("self").ok_or(Error::MissingDetailLink {
                entity: "product",
                rel: "self",
            })?;
            self.get_json::<ProductRecord>(href, true).await
        });

        join_all(details).await.into_iter().collect()
    }

    /// Fetch a single product by id.
    pub async fn get_product(&self, id: i64) -> Result<ProductRecord, Error> {
        self.get_json(&format!("/api/product/{id}"), true).await
    }

    /// Create a product. The response body carries no usable contract;
    /// only the status is checked.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), Error> {
        self.post_no_response(COLLECTION, product, true).await
    }

    /// Update a product by id.
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> Result<(), Error> {
        self.put_no_response(&format!("/api/product/{id}"), update, true)
            .await
    }

    /// Delete a product by id.
    pub async fn delete_product(&self, id: i64) -> Result<(), Error> {
        self.delete_no_response(&format!("/api/product/{id}"), true)
            .await
    }
}
