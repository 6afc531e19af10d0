// Manufacturer endpoints.
//
// Summaries carry a `storage:manufacturer` link; the detail route nests
// its record as a single-element sequence under a `manufacturer` key.

use futures_util::future::join_all;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{
    ManufacturerCollection, ManufacturerDetail, ManufacturerRecord, ManufacturerUpdate,
    NewManufacturer,
};

const COLLECTION: &str = "/api/manufacturer/";
const DETAIL_REL: &str = "storage:manufacturer";

fn unwrap_detail(detail: ManufacturerDetail) -> Result<ManufacturerRecord, Error> {
    detail
        .manufacturer
        .into_iter()
        .next()
        .ok_or(Error::EmptyDetail {
            entity: "manufacturer",
        })
}

impl CatalogClient {
    /// List all manufacturers, fully detail-resolved, in server list order.
    pub async fn list_manufacturers(&self) -> Result<Vec<ManufacturerRecord>, Error> {
        let collection: ManufacturerCollection = self.get_json(COLLECTION, true).await?;

        let details = collection.items.iter().map(|summary| async move {
            let href = summary
                .controls
                .link(DETAIL_REL)
                .ok_or(Error::MissingDetailLink {
                    entity: "manufacturer",
                    rel: DETAIL_REL,
                })?;
            let detail: ManufacturerDetail = self.get_json(href, true).await?;
            unwrap_detail(detail)
        });

        join_all(details).await.into_iter().collect()
    }

    /// Fetch a single manufacturer by id.
    pub async fn get_manufacturer(&self, id: i64) -> Result<ManufacturerRecord, Error> {
        let detail: ManufacturerDetail =
            self.get_json(&format!("/api/manufacturer/{id}"), true).await?;
        unwrap_detail(detail)
    }

    /// Create a manufacturer.
    pub async fn create_manufacturer(&self, manufacturer: &NewManufacturer) -> Result<(), Error> {
        self.post_no_response(COLLECTION, manufacturer, true).await
    }

    /// Update a manufacturer by id.
    pub async fn update_manufacturer(
        &self,
        id: i64,
        update: &ManufacturerUpdate,
    ) -> Result<(), Error> {
        self.put_no_response(&format!("/api/manufacturer/{id}"), update, true)
            .await
    }

    /// Delete a manufacturer by id.
    ///
    /// No client-side check that products still reference the id; the
    /// server's behavior for referenced manufacturers is not assumed.
    pub async fn delete_manufacturer(&self, id: i64) -> Result<(), Error> {
        self.delete_no_response(&format!("/api/manufacturer/{id}"), true)
            .await
    }
}
