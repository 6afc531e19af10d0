// Product option endpoints. Flat collection, no detail resolution.

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{NewOption, OptionCollection, OptionRecord, OptionUpdate};

const COLLECTION: &str = "/api/option/";

impl CatalogClient {
    /// List all product options in server list order.
    pub async fn list_options(&self) -> Result<Vec<OptionRecord>, Error> {
        let collection: OptionCollection = self.get_json(COLLECTION, true).await?;
        Ok(collection.options)
    }

    /// Create an option.
    pub async fn create_option(&self, option: &NewOption) -> Result<(), Error> {
        self.post_no_response(COLLECTION, option, true).await
    }

    /// Update an option by id.
    pub async fn update_option(&self, id: i64, update: &OptionUpdate) -> Result<(), Error> {
        self.put_no_response(&format!("/api/option/{id}"), update, true)
            .await
    }

    /// Delete an option by id.
    pub async fn delete_option(&self, id: i64) -> Result<(), Error> {
        self.delete_no_response(&format!("/api/option/{id}"), true)
            .await
    }
}
