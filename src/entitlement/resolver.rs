//! Entitlement resolution: subscription × requirement → access decision.
//!
//! Every function here fails closed: an absent snapshot ("not yet loaded"
//! included) or an inactive status denies access, no exceptions. The
//! decisions are pure functions over the snapshot.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{FeatureKey, SubscriptionTier},
    entitlement::subscription::Subscription,
    error::{GateError, Result},
};

/// Non-empty set of acceptable tiers.
///
/// A requirement is an "any of" set: holding the *lowest* listed tier (or
/// anything above it) satisfies it. The empty set is unrepresentable —
/// "no requirement at all" is `Option::<TierRequirement>::None` at the gate
/// level, which is the single place absence of constraints is permissive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRequirement(Vec<SubscriptionTier>);

impl TierRequirement {
    /// Requirement satisfied by a single tier or anything above it.
    #[must_use]
    pub fn single(tier: SubscriptionTier) -> Self {
        Self(vec![tier])
    }

    /// Requirement satisfied by any of the listed tiers.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidRequirement`] on an empty list. Callers
    /// that mean "unrestricted" must omit the requirement instead.
    pub fn any_of<I>(tiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = SubscriptionTier>,
    {
        let tiers: Vec<_> = tiers.into_iter().collect();
        if tiers.is_empty() {
            return Err(GateError::InvalidRequirement(
                "tier requirement must name at least one tier".into(),
            ));
        }
        Ok(Self(tiers))
    }

    /// The lowest-ranked tier in the set.
    ///
    /// This is the tier that actually decides access, and the one a locked
    /// card advertises as the upgrade target.
    #[must_use]
    pub fn minimum(&self) -> SubscriptionTier {
        // Constructors guarantee non-emptiness.
        *self
            .0
            .iter()
            .min_by_key(|t| t.rank())
            .expect("TierRequirement is never empty")
    }

    /// Listed tiers, in insertion order.
    #[must_use]
    pub fn tiers(&self) -> &[SubscriptionTier] {
        &self.0
    }
}

impl From<SubscriptionTier> for TierRequirement {
    fn from(tier: SubscriptionTier) -> Self {
        Self::single(tier)
    }
}

/// Decides whether a subscription may use a gated feature.
///
/// Fails closed on an absent snapshot or an inactive status; otherwise
/// compares the subscription's tier against the feature's minimum tier from
/// the catalog.
///
/// # Examples
///
/// ```
/// use shopflow_gate::{
///     catalog::{FeatureKey, SubscriptionTier},
///     entitlement::{Subscription, SubscriptionStatus, can_use_feature},
/// };
///
/// let sub = Subscription {
///     tier: SubscriptionTier::Premium,
///     status: SubscriptionStatus::Active,
///     current_period_end: None,
///     trial_end: None,
/// };
///
/// assert!(can_use_feature(Some(&sub), FeatureKey::WinnerScaling));
/// assert!(!can_use_feature(Some(&sub), FeatureKey::AllPlatforms));
/// assert!(!can_use_feature(None, FeatureKey::WinnerScaling));
/// ```
#[must_use]
pub fn can_use_feature(subscription: Option<&Subscription>, feature: FeatureKey) -> bool {
    let Some(sub) = subscription else {
        return false;
    };
    if !sub.is_active() {
        return false;
    }
    sub.tier.rank() >= feature.min_tier().rank()
}

/// Decides whether a subscription satisfies a tier requirement.
///
/// Fails closed on an absent snapshot or an inactive status; otherwise the
/// subscription's tier must rank at or above the *lowest* tier in the set.
#[must_use]
pub fn has_required_tier(subscription: Option<&Subscription>, required: &TierRequirement) -> bool {
    let Some(sub) = subscription else {
        return false;
    };
    if !sub.is_active() {
        return false;
    }
    sub.tier.rank() >= required.minimum().rank()
}
