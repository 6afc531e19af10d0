//! Product command handlers.

use tabled::Tabled;

use shopsync_core::{Console, EntityId, Product};

use crate::cli::{GlobalOpts, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Manufacturer")]
    manufacturer: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Width")]
    width: f64,
    #[tabled(rename = "Options")]
    options: String,
    #[tabled(rename = "Date Added")]
    date_added: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            sku: p.sku.clone(),
            manufacturer: p.manufacturer_name.clone().unwrap_or_default(),
            quantity: p.quantity,
            price: p.price.to_string(),
            width: p.width,
            options: p
                .options
                .iter()
                .map(|o| o.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            date_added: p
                .date_added
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    console: &mut Console,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let products = &mut console.products;

    match args.command {
        ProductsCommand::List => {
            let ok = products.refresh().await;
            util::check_refresh(ok, products.last_error())?;
            let out = output::render_list(
                global.output,
                products.items(),
                |p| ProductRow::from(p),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create {
            name,
            description,
            sku,
            manufacturer,
            quantity,
            image,
            price,
            width,
            options,
        } => {
            // Load the manufacturer picklist; the create form only
            // offers existing ids.
            let ok = products.refresh().await;
            util::check_refresh(ok, products.last_error())?;
            let chosen = EntityId(manufacturer);
            if !products
                .manufacturer_choices()
                .iter()
                .any(|m| m.id == chosen)
            {
                return Err(CliError::NotFound {
                    resource_type: "manufacturer".into(),
                    identifier: manufacturer.to_string(),
                    list_command: "manufacturers list".into(),
                });
            }

            let draft = products.create_draft_mut();
            draft.name = name;
            draft.description = description;
            draft.sku = sku;
            draft.manufacturer_id = Some(chosen);
            draft.quantity = Some(quantity);
            draft.image = image;
            draft.price = Some(price);
            draft.width = Some(width);
            draft.selected_options = options.into_iter().map(EntityId).collect();

            let missing = products.create_draft().missing_required();
            let status = products.create().await;
            util::check_action(status, &missing, products.last_error())?;
            output::confirm("Product added successfully", global.quiet);
            Ok(())
        }

        ProductsCommand::Update {
            id,
            name,
            description,
            sku,
            quantity,
            image,
            price,
            width,
        } => {
            let ok = products.refresh().await;
            util::check_refresh(ok, products.last_error())?;

            if !products.begin_edit(EntityId(id)) {
                return Err(CliError::NotFound {
                    resource_type: "product".into(),
                    identifier: id.to_string(),
                    list_command: "products list".into(),
                });
            }

            // Seeded from the record; flags override individual fields.
            let missing = {
                let draft = products
                    .edit_draft_mut()
                    .ok_or_else(|| CliError::Validation {
                        field: "id".into(),
                        reason: "no row in edit mode".into(),
                    })?;
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
                if let Some(sku) = sku {
                    draft.sku = sku;
                }
                if let Some(quantity) = quantity {
                    draft.quantity = Some(quantity);
                }
                if let Some(image) = image {
                    draft.image = image;
                }
                if let Some(price) = price {
                    draft.price = Some(price);
                }
                if let Some(width) = width {
                    draft.width = Some(width);
                }
                draft.missing_required()
            };

            let updated_name = products
                .edit_draft()
                .map(|d| d.name.clone())
                .unwrap_or_default();
            let status = products.submit_edit().await;
            util::check_action(status, &missing, products.last_error())?;
            output::confirm(
                &format!("Product \"{updated_name}\" updated successfully"),
                global.quiet,
            );
            Ok(())
        }

        ProductsCommand::Delete { id } => {
            let status = products.delete(EntityId(id)).await;
            util::check_action(status, &[], products.last_error())?;
            output::confirm(&format!("Product {id} deleted successfully"), global.quiet);
            Ok(())
        }
    }
}
