//! Shared HTTP client utilities for the data layer.
//!
//! One pooled client serves every backend call to avoid per-request
//! overhead. Each request carries a generated `X-Request-Id` so backend
//! logs can be correlated with client traces.

use std::{sync::LazyLock, time::Duration};

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    data::config::BackendConfig,
    error::{GateError, Result},
};

/// Total request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client for all gating data-layer requests.
///
/// Initialized once and reused, providing connection pooling and reducing
/// per-request overhead.
pub(crate) static GATE_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .expect("failed to create gate HTTP client")
});

/// Validates a shop identifier.
///
/// Shop IDs must be 1-64 characters of alphanumerics, hyphens, and
/// underscores — the same alphabet the backend accepts in paths, which
/// also rules out traversal sequences.
///
/// # Errors
///
/// Returns [`GateError::InvalidShopId`] on an empty, overlong, or
/// out-of-alphabet ID.
pub fn validate_shop_id(shop_id: &str) -> Result<()> {
    if shop_id.is_empty() {
        return Err(GateError::InvalidShopId("shop id cannot be empty".into()));
    }
    if shop_id.len() > 64 {
        return Err(GateError::InvalidShopId("shop id must be 64 characters or less".into()));
    }
    if !shop_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(GateError::InvalidShopId(
            "shop id can only contain alphanumeric characters, hyphens, and underscores".into(),
        ));
    }
    Ok(())
}

/// Executes an authenticated GET and deserializes the JSON response.
///
/// # Errors
///
/// Returns [`GateError::HttpError`] on network failure,
/// [`GateError::BackendError`] on a non-2xx status or undecodable body, and
/// [`GateError::ConfigError`] when the configured token cannot be resolved.
#[instrument(skip(config))]
pub(crate) async fn get_json<R: DeserializeOwned>(config: &BackendConfig, path: &str) -> Result<R> {
    let mut request = GATE_HTTP_CLIENT
        .get(config.endpoint(path))
        .header("X-Request-Id", Uuid::new_v4().to_string());
    if let Some(ref auth) = config.auth {
        request = request.bearer_auth(auth.resolve_token()?);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GateError::BackendError(format!("backend returned status {status}")));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| GateError::BackendError(format!("undecodable backend response: {e}")))
}

/// Executes an authenticated POST with a JSON body and deserializes the
/// JSON response.
///
/// # Errors
///
/// Same contract as [`get_json`].
#[instrument(skip(config, body))]
pub(crate) async fn post_json<T: Serialize, R: DeserializeOwned>(
    config: &BackendConfig,
    path: &str,
    body: &T,
) -> Result<R> {
    let mut request = GATE_HTTP_CLIENT
        .post(config.endpoint(path))
        .header("X-Request-Id", Uuid::new_v4().to_string())
        .json(body);
    if let Some(ref auth) = config.auth {
        request = request.bearer_auth(auth.resolve_token()?);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GateError::BackendError(format!("backend returned status {status}")));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| GateError::BackendError(format!("undecodable backend response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_id_valid() {
        assert!(validate_shop_id("shop-123_abc").is_ok());
        assert!(validate_shop_id("a").is_ok());
        assert!(validate_shop_id(&"x".repeat(64)).is_ok());
    }

    #[test]
    fn test_shop_id_empty_rejected() {
        assert!(matches!(validate_shop_id("").unwrap_err(), GateError::InvalidShopId(_)));
    }

    #[test]
    fn test_shop_id_too_long_rejected() {
        assert!(validate_shop_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_shop_id_rejects_path_traversal() {
        assert!(validate_shop_id("../etc/passwd").is_err());
        assert!(validate_shop_id("shop/123").is_err());
    }

    #[test]
    fn test_shop_id_rejects_whitespace() {
        assert!(validate_shop_id("shop 123").is_err());
    }
}
