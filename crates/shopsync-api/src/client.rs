// Catalog API HTTP client
//
// Wraps `reqwest::Client` with catalog-specific URL construction, the
// `access-key` credential header, and response decoding. All endpoint
// groups (products, manufacturers, etc.) are implemented as inherent
// methods via separate files to keep this module focused on transport
// mechanics.

use std::time::Duration;

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Explicit client configuration: the request target root and the
/// credential attached to authenticated endpoints.
///
/// Constructed once (typically by `shopsync-config`) and handed to
/// [`CatalogClient::new`] — nothing in the client reads ambient
/// environment state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Catalog service root, e.g. `http://localhost:5000`.
    pub base_url: Url,
    /// Access key sent as the `access-key` header on authenticated
    /// endpoints. Orders are served without it.
    pub access_key: Option<SecretString>,
    /// Transport-level request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            access_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_access_key(mut self, key: SecretString) -> Self {
        self.access_key = Some(key);
        self
    }
}

/// Async client for the catalog REST API.
///
/// One instance serves all four entity surfaces. Collection endpoints
/// for products and manufacturers return hypermedia summaries; the
/// `list_*` methods resolve every summary through its embedded detail
/// link before exposing the collection.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    /// Pre-built `access-key` header value, marked sensitive so it never
    /// shows up in debug logs.
    access_key: Option<HeaderValue>,
}

impl CatalogClient {
    /// Create a new client from an [`ApiConfig`].
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let http = transport.build_client()?;

        let access_key = match &config.access_key {
            Some(secret) => {
                let mut value = HeaderValue::from_str(secret.expose_secret())
                    .map_err(|_| Error::InvalidAccessKey)?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            access_key,
        })
    }

    /// Wrap a pre-built `reqwest::Client` (used by tests).
    pub fn with_client(http: reqwest::Client, base_url: Url, access_key: Option<&str>) -> Self {
        let access_key = access_key.and_then(|k| HeaderValue::from_str(k).ok());
        Self {
            http,
            base_url,
            access_key,
        }
    }

    /// The catalog service root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an absolute API path (e.g. `/api/product/`) onto the base URL.
    ///
    /// Hypermedia detail links arrive as absolute paths too, so the same
    /// join handles both static routes and server-provided hrefs.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Apply the `access-key` header when the endpoint requires it.
    fn apply_access_key(&self, builder: reqwest::RequestBuilder, authed: bool) -> reqwest::RequestBuilder {
        match (&self.access_key, authed) {
            (Some(key), true) => builder.header("access-key", key.clone()),
            _ => builder,
        }
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        authed: bool,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let builder = self.apply_access_key(self.http.get(url), authed);
        let resp = builder.send().await.map_err(Error::Transport)?;

        handle_response(resp).await
    }

    /// Send a POST with a JSON body. The catalog service replies with a
    /// plain-text confirmation; the body carries no usable contract, so
    /// only the status is checked.
    pub(crate) async fn post_no_response(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
        authed: bool,
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let builder = self.apply_access_key(self.http.post(url).json(body), authed);
        let resp = builder.send().await.map_err(Error::Transport)?;

        handle_empty(resp).await
    }

    /// Send a PUT with a JSON body, status-checked only.
    pub(crate) async fn put_no_response(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
        authed: bool,
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let builder = self.apply_access_key(self.http.put(url).json(body), authed);
        let resp = builder.send().await.map_err(Error::Transport)?;

        handle_empty(resp).await
    }

    /// Send a DELETE, status-checked only.
    pub(crate) async fn delete_no_response(&self, path: &str, authed: bool) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let builder = self.apply_access_key(self.http.delete(url), authed);
        let resp = builder.send().await.map_err(Error::Transport)?;

        handle_empty(resp).await
    }
}

// ── Response handling ────────────────────────────────────────────────

/// Map a credential rejection or non-success status to a typed error.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(Error::AccessDenied {
            status: status.as_u16(),
        });
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        });
    }

    Ok(resp)
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let resp = check_status(resp).await?;

    let body = resp.text().await.map_err(Error::Transport)?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    check_status(resp).await.map(|_| ())
}
