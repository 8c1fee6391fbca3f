//! Cached snapshot reads from the billing backend.
//!
//! [`GateBackend`] owns the snapshot caches and is the only writer of
//! snapshot state. Reads go through the cache first; a miss or a stale
//! entry triggers a fetch, retried on transient transport failures only.
//! Mutating actions elsewhere (plan change, cancellation, payment retry)
//! call the `invalidate_*` hooks so the next read is fresh — entitlements
//! never unlock optimistically.
//!
//! Dropping an in-flight read (a consuming surface unmounted or navigated
//! away) cancels the fetch before it stores anything; there are no dangling
//! writes.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    data::{
        cache::SnapshotCache,
        config::BackendConfig,
        http::{get_json, validate_shop_id},
    },
    entitlement::{Subscription, UsageCounts},
    error::Result,
    reliability::{RetryPolicy, is_transient, retry_with_backoff},
};

/// Wire envelope for the subscription endpoint.
///
/// The backend distinguishes "no record" from transport failure by
/// returning `{"subscription": null}` with a 2xx status.
#[derive(Debug, Deserialize)]
struct SubscriptionEnvelope {
    subscription: Option<Subscription>,
}

/// Cached, read-only view of the billing backend.
#[derive(Debug)]
pub struct GateBackend {
    config: BackendConfig,
    retry: RetryPolicy,
    subscriptions: SnapshotCache<Option<Subscription>>,
    usage: SnapshotCache<UsageCounts>,
}

impl GateBackend {
    /// Creates a backend view from a validated configuration.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        let staleness = std::time::Duration::from_secs(config.snapshots.staleness_secs);
        let capacity = config.snapshots.cache_capacity;
        Self {
            config,
            retry: RetryPolicy::default(),
            subscriptions: SnapshotCache::new(capacity, staleness),
            usage: SnapshotCache::new(capacity, staleness),
        }
    }

    /// Overrides the retry policy for snapshot reads.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Backend configuration in use.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Current subscription snapshot for a shop.
    ///
    /// `Ok(None)` means the backend confirmed there is no record — the
    /// gating core treats that exactly like "not yet loaded" and fails
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidShopId`](crate::error::GateError) on a
    /// malformed ID, and transport/backend errors after transient retries
    /// are exhausted. The cached snapshot is left untouched on failure.
    #[instrument(skip(self))]
    pub async fn subscription(&self, shop_id: &str) -> Result<Option<Subscription>> {
        validate_shop_id(shop_id)?;

        if let Some(snapshot) = self.subscriptions.get_fresh(shop_id) {
            debug!(shop_id, "subscription snapshot served from cache");
            return Ok(snapshot);
        }

        let path = format!("/billing/subscription/{shop_id}");
        let envelope: SubscriptionEnvelope = retry_with_backoff(&self.retry, is_transient, || {
            get_json(&self.config, &path)
        })
        .await?;

        self.subscriptions.store(shop_id, envelope.subscription.clone());
        Ok(envelope.subscription)
    }

    /// Current usage counters for a shop.
    ///
    /// # Errors
    ///
    /// Same contract as [`subscription`](Self::subscription).
    #[instrument(skip(self))]
    pub async fn usage_counts(&self, shop_id: &str) -> Result<UsageCounts> {
        validate_shop_id(shop_id)?;

        if let Some(counts) = self.usage.get_fresh(shop_id) {
            debug!(shop_id, "usage snapshot served from cache");
            return Ok(counts);
        }

        let path = format!("/billing/usage/{shop_id}");
        let counts: UsageCounts = retry_with_backoff(&self.retry, is_transient, || {
            get_json(&self.config, &path)
        })
        .await?;

        self.usage.store(shop_id, counts);
        Ok(counts)
    }

    /// Drops the cached subscription snapshot for a shop.
    ///
    /// Call after checkout or billing-portal actions complete.
    pub fn invalidate_subscription(&self, shop_id: &str) {
        self.subscriptions.invalidate(shop_id);
    }

    /// Drops the cached usage counters for a shop.
    ///
    /// Call after any generation action that consumes quota.
    pub fn invalidate_usage(&self, shop_id: &str) {
        self.usage.invalidate(shop_id);
    }

    /// Drops every cached snapshot for a shop.
    pub fn invalidate_all(&self, shop_id: &str) {
        self.invalidate_subscription(shop_id);
        self.invalidate_usage(shop_id);
    }
}
