//! Manufacturer command handlers.

use tabled::Tabled;

use shopsync_core::{Console, EntityId, Manufacturer};

use crate::cli::{GlobalOpts, ManufacturersArgs, ManufacturersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ManufacturerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Manufacturer> for ManufacturerRow {
    fn from(m: &Manufacturer) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            image: m.image.clone(),
            description: m.description.clone(),
        }
    }
}

pub async fn handle(
    console: &mut Console,
    args: ManufacturersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let manufacturers = &mut console.manufacturers;

    match args.command {
        ManufacturersCommand::List => {
            let ok = manufacturers.refresh().await;
            util::check_refresh(ok, manufacturers.last_error())?;
            let out = output::render_list(
                global.output,
                manufacturers.items(),
                |m| ManufacturerRow::from(m),
                |m| m.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ManufacturersCommand::Create {
            name,
            image,
            description,
        } => {
            let draft = manufacturers.create_draft_mut();
            draft.name = name;
            draft.image = image;
            draft.description = description;

            let missing = manufacturers.create_draft().missing_required();
            let status = manufacturers.create().await;
            util::check_action(status, &missing, manufacturers.last_error())?;
            output::confirm("Manufacturer added successfully", global.quiet);
            Ok(())
        }

        ManufacturersCommand::Update {
            id,
            name,
            image,
            description,
        } => {
            let ok = manufacturers.refresh().await;
            util::check_refresh(ok, manufacturers.last_error())?;

            if !manufacturers.begin_edit(EntityId(id)) {
                return Err(CliError::NotFound {
                    resource_type: "manufacturer".into(),
                    identifier: id.to_string(),
                    list_command: "manufacturers list".into(),
                });
            }

            let missing = {
                let draft = manufacturers
                    .edit_draft_mut()
                    .ok_or_else(|| CliError::Validation {
                        field: "id".into(),
                        reason: "no row in edit mode".into(),
                    })?;
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(image) = image {
                    draft.image = image;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
                draft.missing_required()
            };

            let updated_name = manufacturers
                .edit_draft()
                .map(|d| d.name.clone())
                .unwrap_or_default();
            let status = manufacturers.submit_edit().await;
            util::check_action(status, &missing, manufacturers.last_error())?;
            output::confirm(
                &format!("Manufacturer \"{updated_name}\" updated successfully"),
                global.quiet,
            );
            Ok(())
        }

        ManufacturersCommand::Delete { id } => {
            // No referential check against products; the server decides
            // what a delete of a referenced manufacturer means.
            let status = manufacturers.delete(EntityId(id)).await;
            util::check_action(status, &[], manufacturers.last_error())?;
            output::confirm("Manufacturer deleted successfully", global.quiet);
            Ok(())
        }
    }
}
