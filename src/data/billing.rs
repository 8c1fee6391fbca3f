//! Billing portal and checkout launchers.
//!
//! Both launchers create a session on the backend and hand back a redirect
//! URL; the presentation layer performs the actual navigation. Failures are
//! surfaced as values and never retried automatically — the button is
//! re-enabled for a manual retry.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    catalog::SubscriptionTier,
    data::{config::BackendConfig, http::{post_json, validate_shop_id}},
    error::{GateError, Result},
};

/// Redirect target for the external billing portal.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSession {
    /// URL the presentation layer navigates to.
    pub url: String,
}

/// Redirect target for the external checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// URL the presentation layer navigates to.
    pub url: String,
}

#[derive(Debug, Serialize)]
struct PortalRequest<'a> {
    shop_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CheckoutRequest<'a> {
    shop_id: &'a str,
    tier: SubscriptionTier,
}

/// Creates a billing-portal session and returns its redirect URL.
///
/// Used by the past-due and canceled notices' call-to-action.
///
/// # Errors
///
/// Returns [`GateError::PortalError`] when the backend refuses the session,
/// [`GateError::HttpError`] on transport failure. Neither is retried here.
#[instrument(skip(config))]
pub async fn open_customer_portal(config: &BackendConfig, shop_id: &str) -> Result<PortalSession> {
    validate_shop_id(shop_id)?;
    post_json(config, "/billing/portal", &PortalRequest { shop_id })
        .await
        .map_err(|e| match e {
            GateError::BackendError(msg) => GateError::PortalError(msg),
            other => other,
        })
}

/// Creates a checkout session for a tier and returns its redirect URL.
///
/// Used by the trial-ending and no-subscription notices and by locked-card
/// upgrade links.
///
/// # Errors
///
/// Returns [`GateError::CheckoutError`] when the backend refuses the
/// session, [`GateError::HttpError`] on transport failure. Neither is
/// retried here.
#[instrument(skip(config))]
pub async fn create_checkout_session(
    config: &BackendConfig,
    shop_id: &str,
    tier: SubscriptionTier,
) -> Result<CheckoutSession> {
    validate_shop_id(shop_id)?;
    post_json(config, "/billing/checkout", &CheckoutRequest { shop_id, tier })
        .await
        .map_err(|e| match e {
            GateError::BackendError(msg) => GateError::CheckoutError(msg),
            other => other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig::from_toml(r#"base_url = "https://api.shopflow.example""#).unwrap()
    }

    #[tokio::test]
    async fn test_portal_rejects_invalid_shop_id() {
        let result = open_customer_portal(&config(), "bad shop").await;
        assert!(matches!(result.unwrap_err(), GateError::InvalidShopId(_)));
    }

    #[tokio::test]
    async fn test_checkout_rejects_invalid_shop_id() {
        let result = create_checkout_session(&config(), "", SubscriptionTier::Premium).await;
        assert!(matches!(result.unwrap_err(), GateError::InvalidShopId(_)));
    }

    #[test]
    fn test_checkout_request_serializes_tier_lowercase() {
        let body = CheckoutRequest { shop_id: "shop-1", tier: SubscriptionTier::Vip };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"tier\":\"vip\""));
    }
}
