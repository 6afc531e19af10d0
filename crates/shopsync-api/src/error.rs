use thiserror::Error;

/// Top-level error type for the `shopsync-api` crate.
///
/// Covers every failure mode of the catalog API surface: transport,
/// credential rejection, non-success statuses, and payload decoding.
/// `shopsync-core` decides what to do with these — controllers log and
/// swallow them rather than letting them halt a collection.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error (bad base URL or a malformed hypermedia link).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Credentials ─────────────────────────────────────────────────
    /// The configured access key contains bytes that cannot travel in a header.
    #[error("Invalid access key: not a valid header value")]
    InvalidAccessKey,

    /// The catalog service rejected the access key (HTTP 401/403).
    #[error("Access denied (HTTP {status}): check the configured access key")]
    AccessDenied { status: u16 },

    // ── Catalog API ─────────────────────────────────────────────────
    /// Non-success response from the catalog service.
    #[error("Catalog API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Hypermedia ──────────────────────────────────────────────────
    /// A collection summary is missing the link needed to resolve its detail.
    #[error("Missing '{rel}' link in {entity} summary")]
    MissingDetailLink {
        entity: &'static str,
        rel: &'static str,
    },

    /// A detail response nested its record but the sequence was empty.
    #[error("Empty {entity} detail envelope")]
    EmptyDetail { entity: &'static str },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the access key was missing or rejected.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}
