//! Command-line definitions (clap derive).

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(
    name = "shopsync",
    version,
    about = "Terminal admin console for the shopsync e-commerce catalog",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Profile name from config.toml
    #[arg(long, short = 'p', global = true)]
    pub profile: Option<String>,

    /// Catalog service root (overrides the profile)
    #[arg(long, global = true, env = "SHOPSYNC_API_URL")]
    pub api_url: Option<String>,

    /// Access key for authenticated endpoints (overrides the profile)
    #[arg(long, global = true, env = "SHOPSYNC_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Suppress confirmations and non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Request timeout in seconds (overrides the profile)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    JsonCompact,
    Yaml,
    Plain,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage catalog products
    Products(ProductsArgs),
    /// Manage manufacturers
    Manufacturers(ManufacturersArgs),
    /// Manage product options
    Options(OptionsArgs),
    /// View customer orders (read-only)
    Orders(OrdersArgs),
    /// Load and show all four collections at once
    Overview,
    /// Manage configuration
    Config(ConfigArgs),
}

// ── Products ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List all products
    List,
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        sku: String,
        /// Manufacturer id, chosen from `shopsync manufacturers list`
        #[arg(long)]
        manufacturer: i64,
        #[arg(long)]
        quantity: u32,
        /// Image URL
        #[arg(long)]
        image: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        width: f64,
        /// Option id to associate (repeatable)
        #[arg(long = "option")]
        options: Vec<i64>,
    },
    /// Update a product; omitted fields keep their current values
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        width: Option<f64>,
    },
    /// Delete a product by id
    Delete { id: i64 },
}

// ── Manufacturers ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ManufacturersArgs {
    #[command(subcommand)]
    pub command: ManufacturersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ManufacturersCommand {
    /// List all manufacturers
    List,
    /// Create a manufacturer
    Create {
        #[arg(long)]
        name: String,
        /// Image URL
        #[arg(long)]
        image: String,
        #[arg(long)]
        description: String,
    },
    /// Update a manufacturer; omitted fields keep their current values
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a manufacturer by id
    Delete { id: i64 },
}

// ── Options ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OptionsArgs {
    #[command(subcommand)]
    pub command: OptionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum OptionsCommand {
    /// List all product options
    List,
    /// Create a product option
    Create {
        #[arg(long)]
        name: String,
        /// Image URL
        #[arg(long)]
        image: String,
    },
    /// Update an option; omitted fields keep their current values
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete an option by id
    Delete { id: i64 },
}

// ── Orders ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List all customer orders
    List,
}

// ── Config ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile in config.toml
    Init {
        /// Catalog service root
        #[arg(long)]
        api_url: String,
        /// Access key stored in the profile (prefer SHOPSYNC_ACCESS_KEY)
        #[arg(long)]
        access_key: Option<String>,
        /// Profile name to write
        #[arg(long, default_value = "default")]
        name: String,
    },
    /// Show the effective configuration (access keys redacted)
    Show,
    /// Print the config file path
    Path,
}
