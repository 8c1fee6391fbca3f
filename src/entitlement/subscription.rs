//! Subscription snapshot model and derived values.
//!
//! The billing backend owns the subscription record; this module models a
//! read-only snapshot of it, refreshed by the data layer. "No subscription"
//! is `Option::<Subscription>::None` throughout the crate, never a status
//! variant — the resolver fails closed on `None` exactly as it does on an
//! inactive status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::SubscriptionTier;

/// Runtime billing status of a subscription record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Paid and current.
    Active,
    /// In a trial period.
    Trialing,
    /// Payment failed; in the grace window.
    PastDue,
    /// Terminated; access ends at the period boundary.
    Canceled,
}

/// Read-only subscription snapshot.
///
/// All values are computed against this snapshot; nothing here is ever
/// mutated locally. A stale snapshot is replaced wholesale by the data
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Plan level.
    pub tier: SubscriptionTier,
    /// Billing status.
    pub status: SubscriptionStatus,
    /// End of the current billing period.
    pub current_period_end: Option<DateTime<Utc>>,
    /// End of the trial period, when one exists.
    pub trial_end: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Whether the record grants access: active or trialing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status, SubscriptionStatus::Active | SubscriptionStatus::Trialing)
    }

    /// Whether the last payment failed.
    #[must_use]
    pub fn is_past_due(&self) -> bool {
        self.status == SubscriptionStatus::PastDue
    }

    /// The timestamp renewal math is measured against.
    ///
    /// While trialing, the trial end takes precedence; otherwise the current
    /// period end. `None` when the snapshot carries no usable timestamp.
    #[must_use]
    fn renewal_reference(&self) -> Option<DateTime<Utc>> {
        if self.status == SubscriptionStatus::Trialing
            && let Some(trial_end) = self.trial_end
        {
            return Some(trial_end);
        }
        self.current_period_end
    }

    /// Whole days from `now` until the relevant end timestamp.
    ///
    /// Floor-rounded; already-elapsed timestamps report `Some(0)`. Returns
    /// `None` only when the snapshot has no relevant timestamp at all.
    #[must_use]
    pub fn days_until_renewal_from(&self, now: DateTime<Utc>) -> Option<i64> {
        self.renewal_reference().map(|end| (end - now).num_days().max(0))
    }

    /// [`days_until_renewal_from`](Self::days_until_renewal_from) measured
    /// against the current wall clock.
    #[must_use]
    pub fn days_until_renewal(&self) -> Option<i64> {
        self.days_until_renewal_from(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn snapshot(status: SubscriptionStatus) -> Subscription {
        Subscription {
            tier: SubscriptionTier::Premium,
            status,
            current_period_end: None,
            trial_end: None,
        }
    }

    // ========================================================================
    // Derived Status Tests
    // ========================================================================

    #[test]
    fn test_active_and_trialing_are_active() {
        assert!(snapshot(SubscriptionStatus::Active).is_active());
        assert!(snapshot(SubscriptionStatus::Trialing).is_active());
    }

    #[test]
    fn test_past_due_and_canceled_are_not_active() {
        assert!(!snapshot(SubscriptionStatus::PastDue).is_active());
        assert!(!snapshot(SubscriptionStatus::Canceled).is_active());
    }

    #[test]
    fn test_is_past_due_tracks_status() {
        assert!(snapshot(SubscriptionStatus::PastDue).is_past_due());
        assert!(!snapshot(SubscriptionStatus::Active).is_past_due());
    }

    // ========================================================================
    // Renewal Math Tests
    // ========================================================================

    #[test]
    fn test_days_until_renewal_floor_rounds() {
        let now = Utc::now();
        let mut sub = snapshot(SubscriptionStatus::Active);
        // 3 days and 20 hours out floors to 3.
        sub.current_period_end = Some(now + Duration::days(3) + Duration::hours(20));
        assert_eq!(sub.days_until_renewal_from(now), Some(3));
    }

    #[test]
    fn test_days_until_renewal_none_without_timestamp() {
        let sub = snapshot(SubscriptionStatus::Active);
        assert_eq!(sub.days_until_renewal_from(Utc::now()), None);
    }

    #[test]
    fn test_days_until_renewal_elapsed_clamps_to_zero() {
        let now = Utc::now();
        let mut sub = snapshot(SubscriptionStatus::Canceled);
        sub.current_period_end = Some(now - Duration::days(2));
        assert_eq!(sub.days_until_renewal_from(now), Some(0));
    }

    #[test]
    fn test_trialing_prefers_trial_end() {
        let now = Utc::now();
        let mut sub = snapshot(SubscriptionStatus::Trialing);
        sub.trial_end = Some(now + Duration::days(2));
        sub.current_period_end = Some(now + Duration::days(30));
        assert_eq!(sub.days_until_renewal_from(now), Some(2));
    }

    #[test]
    fn test_trialing_falls_back_to_period_end() {
        let now = Utc::now();
        let mut sub = snapshot(SubscriptionStatus::Trialing);
        sub.current_period_end = Some(now + Duration::days(14));
        assert_eq!(sub.days_until_renewal_from(now), Some(14));
    }

    #[test]
    fn test_non_trialing_ignores_trial_end() {
        let now = Utc::now();
        let mut sub = snapshot(SubscriptionStatus::Active);
        sub.trial_end = Some(now + Duration::days(1));
        sub.current_period_end = Some(now + Duration::days(25));
        assert_eq!(sub.days_until_renewal_from(now), Some(25));
    }

    // ========================================================================
    // Serialization Tests
    // ========================================================================

    #[test]
    fn test_status_serialization_is_snake_case() {
        let json = serde_json::to_string(&SubscriptionStatus::PastDue).unwrap();
        assert_eq!(json, "\"past_due\"");
    }

    #[test]
    fn test_snapshot_deserialization() {
        let json = r#"{
            "tier": "vip",
            "status": "trialing",
            "current_period_end": "2026-09-01T00:00:00Z",
            "trial_end": "2026-08-20T00:00:00Z"
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.tier, SubscriptionTier::Vip);
        assert_eq!(sub.status, SubscriptionStatus::Trialing);
        assert!(sub.trial_end.is_some());
    }
}
