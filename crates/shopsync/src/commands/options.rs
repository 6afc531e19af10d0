//! Product option command handlers.

use tabled::Tabled;

use shopsync_core::{Console, EntityId, OptionItem};

use crate::cli::{GlobalOpts, OptionsArgs, OptionsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl From<&OptionItem> for OptionRow {
    fn from(o: &OptionItem) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.name.clone(),
            image: o.image.clone(),
        }
    }
}

pub async fn handle(
    console: &mut Console,
    args: OptionsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let options = &mut console.options;

    match args.command {
        OptionsCommand::List => {
            let ok = options.refresh().await;
            util::check_refresh(ok, options.last_error())?;
            let out = output::render_list(global.output, options.items(), |o| OptionRow::from(o), |o| {
                o.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OptionsCommand::Create { name, image } => {
            let draft = options.create_draft_mut();
            draft.name = name;
            draft.image = image;

            let missing = options.create_draft().missing_required();
            let status = options.create().await;
            util::check_action(status, &missing, options.last_error())?;
            output::confirm("Option added successfully", global.quiet);
            Ok(())
        }

        OptionsCommand::Update { id, name, image } => {
            let ok = options.refresh().await;
            util::check_refresh(ok, options.last_error())?;

            if !options.begin_edit(EntityId(id)) {
                return Err(CliError::NotFound {
                    resource_type: "option".into(),
                    identifier: id.to_string(),
                    list_command: "options list".into(),
                });
            }

            let missing = {
                let draft = options.edit_draft_mut().ok_or_else(|| CliError::Validation {
                    field: "id".into(),
                    reason: "no row in edit mode".into(),
                })?;
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(image) = image {
                    draft.image = image;
                }
                draft.missing_required()
            };

            let status = options.submit_edit().await;
            util::check_action(status, &missing, options.last_error())?;
            output::confirm(&format!("Option \"{id}\" updated successfully"), global.quiet);
            Ok(())
        }

        OptionsCommand::Delete { id } => {
            let status = options.delete(EntityId(id)).await;
            util::check_action(status, &[], options.last_error())?;
            output::confirm("Option deleted successfully", global.quiet);
            Ok(())
        }
    }
}
