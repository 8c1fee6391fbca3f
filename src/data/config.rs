//! Backend configuration types.
//!
//! TOML-deserializable configuration for the billing backend the data layer
//! talks to. Validation happens once at load time; everything past
//! [`BackendConfig::validate`] can assume a sane, HTTPS-only endpoint.

use serde::Deserialize;
use url::Url;

use crate::error::{GateError, Result};

/// Snapshot staleness window in seconds when none is configured.
const DEFAULT_STALENESS_SECS: u64 = 120;

/// Cached shops per snapshot cache when none is configured.
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Root backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL for the billing backend API.
    pub base_url: String,

    /// API version prefix (e.g. "/api/v1").
    #[serde(default)]
    pub api_prefix: String,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: Option<AuthConfig>,

    /// Snapshot freshness settings.
    #[serde(default)]
    pub snapshots: SnapshotConfig,
}

impl BackendConfig {
    /// Parses and validates a TOML configuration string.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigError`] on malformed TOML or any
    /// validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use shopflow_gate::data::BackendConfig;
    ///
    /// let config = BackendConfig::from_toml(
    ///     r#"
    ///     base_url = "https://api.shopflow.example"
    ///     api_prefix = "/api/v1"
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.snapshots.staleness_secs, 120);
    /// ```
    pub fn from_toml(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)
            .map_err(|e| GateError::ConfigError(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for security issues.
    ///
    /// Checks:
    /// - Base URL must be HTTPS (not HTTP)
    /// - Base URL must not be localhost or a loopback address
    /// - Bearer-token env var names must be alphanumeric/underscore
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigError`] if any check fails.
    pub fn validate(&self) -> Result<()> {
        self.validate_base_url()?;
        if let Some(ref auth) = self.auth {
            auth.validate()?;
        }
        Ok(())
    }

    /// Joins the base URL, prefix, and a path into a request URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url.trim_end_matches('/'), self.api_prefix, path)
    }

    fn validate_base_url(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            GateError::ConfigError(format!("invalid base_url '{}': {e}", self.base_url))
        })?;

        if url.scheme() != "https" {
            return Err(GateError::ConfigError(format!(
                "base_url must use HTTPS, got: {}",
                url.scheme()
            )));
        }

        if let Some(host) = url.host_str() {
            let host_lower = host.to_lowercase();
            if host_lower == "localhost"
                || host_lower == "::1"
                || host_lower == "[::1]"
                || host_lower.starts_with("127.")
            {
                return Err(GateError::ConfigError(format!(
                    "base_url must not be localhost or loopback: {host}"
                )));
            }
        }

        Ok(())
    }
}

/// Bearer-token authentication configuration.
///
/// The token itself never appears in configuration files; only the name of
/// the environment variable holding it does.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Environment variable holding the bearer token.
    pub bearer_token_env: String,
}

impl AuthConfig {
    /// Validates the env var name.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigError`] if the name is empty or contains
    /// characters outside `[A-Za-z0-9_]`.
    pub fn validate(&self) -> Result<()> {
        if self.bearer_token_env.is_empty()
            || !self
                .bearer_token_env
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(GateError::ConfigError(format!(
                "bearer_token_env must be alphanumeric/underscore, got: '{}'",
                self.bearer_token_env
            )));
        }
        Ok(())
    }

    /// Reads the token from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigError`] when the variable is unset or
    /// empty.
    pub fn resolve_token(&self) -> Result<String> {
        match std::env::var(&self.bearer_token_env) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(GateError::ConfigError(format!(
                "bearer token env var '{}' is unset or empty",
                self.bearer_token_env
            ))),
        }
    }
}

/// Snapshot freshness settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Seconds a cached snapshot stays fresh (default: 120).
    ///
    /// Mutating actions bypass this via explicit invalidation; the window
    /// only bounds how stale a passive read can get.
    #[serde(default = "default_staleness")]
    pub staleness_secs: u64,

    /// Shops kept per snapshot cache before LRU eviction (default: 256).
    #[serde(default = "default_capacity")]
    pub cache_capacity: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self { staleness_secs: DEFAULT_STALENESS_SECS, cache_capacity: DEFAULT_CACHE_CAPACITY }
    }
}

fn default_staleness() -> u64 {
    DEFAULT_STALENESS_SECS
}

fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}
