//! Typed client for the Shopify Admin API proxy.
//!
//! The proxy accepts an authenticated POST naming one of four fixed
//! actions, forwards it to the pinned Admin REST API version, and returns
//! `{success, data}` on success. This client normalizes the shop domain
//! before sending and maps the proxy's auth/not-found statuses to
//! user-facing messages.

use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{GateError, Result};

/// Shopify Admin REST API version the proxy is pinned to.
pub const SHOPIFY_API_VERSION: &str = "2024-04";

/// The four proxy actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyAction {
    /// Verify the shop domain and access token.
    TestConnection,
    /// List products.
    GetProducts,
    /// List custom collections.
    GetCollections,
    /// List smart collections.
    GetSmartCollections,
}

/// Request body the proxy accepts.
#[derive(Debug, Clone, Serialize)]
pub struct ProxyRequest {
    /// Which Admin endpoint to call.
    pub action: ProxyAction,
    /// Shop domain; normalized before sending.
    pub shop_domain: String,
    /// Shopify Admin access token for the shop.
    pub access_token: String,
    /// Page size for list actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Successful proxy response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyResponse {
    /// Always true on a 2xx response.
    pub success: bool,
    /// Raw Admin API payload for the requested action.
    pub data: serde_json::Value,
}

/// Failure body the proxy returns on non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
struct ProxyFailure {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Normalizes a shop domain the way the proxy does.
///
/// Strips the scheme and anything after the first slash, trims whitespace,
/// lowercases, and appends `.myshopify.com` when absent.
///
/// # Examples
///
/// ```
/// use shopflow_gate::shopify::normalize_shop_domain;
///
/// assert_eq!(normalize_shop_domain("https://my-store.myshopify.com/"), "my-store.myshopify.com");
/// assert_eq!(normalize_shop_domain("my-store"), "my-store.myshopify.com");
/// ```
#[must_use]
pub fn normalize_shop_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme.split('/').next().unwrap_or_default().to_lowercase();

    if host.is_empty() || host.ends_with(".myshopify.com") {
        host
    } else {
        format!("{host}.myshopify.com")
    }
}

/// User-facing message for a proxy status code.
#[must_use]
pub fn proxy_error_message(status: u16) -> &'static str {
    match status {
        401 => "The access token was rejected. Reconnect your Shopify store.",
        403 => "The access token is missing the required Admin API permissions.",
        404 => "Store not found. Check the shop domain and try again.",
        _ => "The Shopify connection failed. Try again in a moment.",
    }
}

/// Client for the external Shopify proxy function.
#[derive(Debug, Clone)]
pub struct ShopifyProxyClient {
    endpoint: String,
    bearer_token: String,
}

impl ShopifyProxyClient {
    /// Creates a client for the proxy at `endpoint`, authenticating with
    /// `bearer_token`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigError`] on a non-HTTPS endpoint.
    pub fn new<S: Into<String>>(endpoint: S, bearer_token: S) -> Result<Self> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("https://") {
            return Err(GateError::ConfigError(format!(
                "proxy endpoint must use HTTPS: {endpoint}"
            )));
        }
        Ok(Self { endpoint, bearer_token: bearer_token.into() })
    }

    /// Executes a proxy action.
    ///
    /// The request's `shop_domain` is normalized before sending, so callers
    /// may pass whatever the merchant typed into the connect form.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::HttpError`] on transport failure and
    /// [`GateError::ProxyError`] with a mapped message on any non-2xx
    /// status.
    #[instrument(skip(self, request), fields(action = ?request.action))]
    pub async fn call(&self, mut request: ProxyRequest) -> Result<ProxyResponse> {
        request.shop_domain = normalize_shop_domain(&request.shop_domain);

        let response = crate::data::http::GATE_HTTP_CLIENT
            .post(&self.endpoint)
            .bearer_auth(&self.bearer_token)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let failure = response.json::<ProxyFailure>().await.unwrap_or(ProxyFailure {
                error: None,
                details: None,
            });
            let mut message = proxy_error_message(status.as_u16()).to_owned();
            if let Some(details) = failure.details.or(failure.error) {
                message = format!("{message} ({details})");
            }
            return Err(GateError::ProxyError { status: status.as_u16(), message });
        }

        response
            .json::<ProxyResponse>()
            .await
            .map_err(|e| GateError::BackendError(format!("undecodable proxy response: {e}")))
    }
}
