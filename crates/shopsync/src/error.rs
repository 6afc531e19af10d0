//! CLI error types with miette diagnostics.
//!
//! Controllers swallow API failures and record a rendered message; the
//! CLI lifts that message into a diagnostic with actionable help and a
//! meaningful exit code.

use miette::Diagnostic;
use thiserror::Error;

use shopsync_config::ConfigError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Catalog API ──────────────────────────────────────────────────
    #[error("Catalog request failed: {message}")]
    #[diagnostic(
        code(shopsync::api_error),
        help("Check that the catalog service is reachable at the configured api_url.")
    )]
    Api { message: String },

    #[error("Access denied by the catalog service")]
    #[diagnostic(
        code(shopsync::access_denied),
        help(
            "Product, manufacturer, and option endpoints require an access key.\n\
             Set SHOPSYNC_ACCESS_KEY or run: shopsync config init"
        )
    )]
    AccessDenied,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(shopsync::not_found),
        help("Run: shopsync {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(shopsync::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(shopsync::profile_not_found),
        help(
            "Create one with: shopsync config init --api-url <URL>\n\
             Or set SHOPSYNC_API_URL to skip profiles entirely."
        )
    )]
    ProfileNotFound { name: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(shopsync::config))]
    Config(#[source] Box<ConfigError>),
}

impl CliError {
    /// Classify a controller's recorded error message. The controller
    /// stores only the rendered string, so the mapping is textual.
    pub fn from_swallowed(message: &str) -> Self {
        if message.starts_with("Access denied") {
            Self::AccessDenied
        } else {
            Self::Api {
                message: message.to_owned(),
            }
        }
    }

    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AccessDenied => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => Self::ProfileNotFound { name },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}
