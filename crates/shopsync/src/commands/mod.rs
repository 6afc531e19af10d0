//! Command handlers, one module per entity surface.

pub mod config_cmd;
pub mod manufacturers;
pub mod options;
pub mod orders;
pub mod overview;
pub mod products;

mod util;

use shopsync_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a parsed command against the mounted console.
pub async fn dispatch(
    command: Command,
    console: &mut Console,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Products(args) => products::handle(console, args, global).await,
        Command::Manufacturers(args) => manufacturers::handle(console, args, global).await,
        Command::Options(args) => options::handle(console, args, global).await,
        Command::Orders(args) => orders::handle(console, args, global).await,
        Command::Overview => overview::handle(console, global).await,
        // Config is dispatched in main before a console exists.
        Command::Config(_) => Ok(()),
    }
}
