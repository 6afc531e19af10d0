// shopsync-api: Async Rust client for the shopsync catalog REST API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod endpoints;

pub use client::{ApiConfig, CatalogClient};
pub use error::Error;
