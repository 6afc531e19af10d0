//! The whole console on one screen: all four collections, loaded
//! concurrently the way the page mounts them.

use owo_colors::OwoColorize;
use serde_json::json;

use shopsync_core::Console;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(console: &mut Console, global: &GlobalOpts) -> Result<(), CliError> {
    console.refresh_all().await;

    // A failed section keeps its previous (empty) collection; surface
    // the first recorded failure so the exit code is honest.
    let first_error = console
        .products
        .last_error()
        .or_else(|| console.manufacturers.last_error())
        .or_else(|| console.options.last_error())
        .or_else(|| console.orders.last_error());
    if let Some(message) = first_error {
        return Err(CliError::from_swallowed(message));
    }

    match global.output {
        OutputFormat::Json | OutputFormat::JsonCompact | OutputFormat::Yaml => {
            let combined = json!({
                "products": console.products.items(),
                "manufacturers": console.manufacturers.items(),
                "options": console.options.items(),
                "orders": console.orders.items(),
            });
            let out = match global.output {
                OutputFormat::Json => output::render_json_pretty(&combined),
                OutputFormat::JsonCompact => output::render_json_compact(&combined),
                _ => output::render_yaml(&combined),
            };
            output::print_output(&out, global.quiet);
        }
        OutputFormat::Table | OutputFormat::Plain => {
            if global.quiet {
                return Ok(());
            }
            println!(
                "{}  {} products · {} manufacturers · {} options · {} orders",
                "shopsync".bold().cyan(),
                console.products.items().len(),
                console.manufacturers.items().len(),
                console.options.items().len(),
                console.orders.items().len(),
            );

            section("Products", console.products.items(), |p| {
                format!("{}  {}  ({})", p.id, p.name, p.sku)
            });
            section("Manufacturers", console.manufacturers.items(), |m| {
                format!("{}  {}", m.id, m.name)
            });
            section("Product options", console.options.items(), |o| {
                format!("{}  {}", o.id, o.name)
            });
            section("Customer orders", console.orders.items(), |o| {
                format!("{}  {}  ${}", o.firstname, o.email, o.total)
            });
        }
    }

    Ok(())
}

fn section<T>(title: &str, items: &[T], line: impl Fn(&T) -> String) {
    println!("\n{}", title.bold());
    if items.is_empty() {
        println!("  (none)");
        return;
    }
    for item in items {
        println!("  {}", line(item));
    }
}
