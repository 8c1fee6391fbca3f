//! Error types for the Shopflow gating core.
//!
//! This module defines all error types that can occur in the data layer and
//! collaborator clients. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! Two things are deliberately *not* errors here:
//!
//! - **Missing data**: an absent or not-yet-loaded subscription snapshot is
//!   `Option::None` and fails closed in the entitlement resolver; it never
//!   raises.
//! - **Configuration defects**: a feature key without a tier mapping or a tier
//!   without a catalog entry cannot be constructed — the catalog uses
//!   exhaustive matches, so those defects are compile errors.
//!
//! # Examples
//!
//! ```
//! use shopflow_gate::error::{GateError, Result};
//!
//! fn require_https(url: &str) -> Result<&str> {
//!     if !url.starts_with("https://") {
//!         return Err(GateError::ConfigError("backend URL must use HTTPS".to_owned()));
//!     }
//!     Ok(url)
//! }
//! ```

use thiserror::Error;

/// Result type alias for gating operations.
///
/// This is a convenience type that uses [`GateError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur in the gating data layer and collaborator clients.
///
/// All variants include contextual information about what went wrong.
/// The error messages are designed to be user-facing and actionable.
///
/// # Error Recovery
///
/// - **Transient errors** ([`HttpError`](Self::HttpError)): the snapshot
///   refresh path retries these with exponential backoff; everything else
///   surfaces them for a manual retry.
/// - **Validation errors** ([`InvalidShopId`](Self::InvalidShopId),
///   [`InvalidRequirement`](Self::InvalidRequirement)): fix the input and
///   retry.
/// - **Configuration errors** ([`ConfigError`](Self::ConfigError)): fix the
///   backend configuration file; nothing at runtime can recover these.
/// - **Launcher failures** ([`PortalError`](Self::PortalError),
///   [`CheckoutError`](Self::CheckoutError)): shown to the user, button
///   re-enabled for manual retry; never retried automatically.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum GateError {
    /// Backend configuration is invalid.
    ///
    /// Raised at load/validate time, not during gating. Common causes:
    /// - Non-HTTPS base URL
    /// - Localhost or loopback base URL
    /// - Malformed TOML or a bearer-token env var name with invalid characters
    #[error("Invalid backend configuration: {0}")]
    ConfigError(String),

    /// HTTP request failed.
    ///
    /// This error wraps [`reqwest::Error`] and occurs when network
    /// communication with the billing backend or the Shopify proxy fails:
    /// timeouts (default: 30 seconds), connection refused, DNS failures,
    /// TLS errors.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Billing backend returned an unusable response.
    ///
    /// Unexpected status code, malformed JSON, or missing required fields.
    /// The cached snapshot (if any) stays untouched when this occurs.
    #[error("Invalid backend response: {0}")]
    BackendError(String),

    /// Shopify proxy rejected the request.
    ///
    /// Carries the HTTP status and the human-readable message mapped from it
    /// (401/403/404 have dedicated messages, see
    /// [`proxy_error_message`](crate::shopify::proxy_error_message)).
    #[error("Shopify proxy error ({status}): {message}")]
    ProxyError {
        /// HTTP status returned by the proxy.
        status: u16,
        /// Mapped, user-facing message.
        message: String,
    },

    /// Billing portal session could not be created.
    ///
    /// Surfaced to the presentation layer as a user-visible message; the
    /// action button is re-enabled for a manual retry.
    #[error("Billing portal launch failed: {0}")]
    PortalError(String),

    /// Checkout session could not be created.
    ///
    /// Same contract as [`PortalError`](Self::PortalError): user-visible,
    /// manual retry only.
    #[error("Checkout launch failed: {0}")]
    CheckoutError(String),

    /// Invalid shop identifier.
    ///
    /// Shop IDs must be 1-64 characters of alphanumerics, hyphens, and
    /// underscores, mirroring what the backend accepts.
    #[error("Invalid shop ID: {0}")]
    InvalidShopId(String),

    /// Invalid tier requirement.
    ///
    /// A [`TierRequirement`](crate::entitlement::TierRequirement) must name
    /// at least one tier; "no requirement" is expressed by omitting the
    /// requirement entirely, not by an empty list.
    #[error("Invalid tier requirement: {0}")]
    InvalidRequirement(String),
}
