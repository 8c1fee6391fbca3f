//! Gate presentation contract: allow, or deny with a visual treatment.
//!
//! A gated surface hands its constraints to [`evaluate_gate`] and renders
//! whatever the decision says — children on allow, one of four locked
//! treatments on deny. The function is pure: identical input always yields
//! the identical decision.

use serde::Serialize;

use crate::{
    catalog::{FeatureKey, SubscriptionTier, TierPlan, plan},
    entitlement::{
        resolver::{TierRequirement, can_use_feature, has_required_tier},
        subscription::Subscription,
    },
};

/// Constraints and presentation flags for one gated surface.
#[derive(Debug, Clone, Default)]
pub struct GateInput<'a> {
    /// Feature constraint. Takes precedence over `required` when both are
    /// set.
    pub feature: Option<FeatureKey>,
    /// Tier-set constraint, consulted only when `feature` is absent.
    pub required: Option<TierRequirement>,
    /// Surface is an inline affordance rather than a full card.
    pub inline: bool,
    /// Render nothing when locked (hide, don't explain).
    pub hide_when_locked: bool,
    /// The surface supplied its own locked-state markup.
    pub has_custom_fallback: bool,
    /// Resolved subscription snapshot; `None` covers both "no record" and
    /// "not yet loaded".
    pub subscription: Option<&'a Subscription>,
}

/// Visual treatment of a denied gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "treatment", rename_all = "snake_case")]
pub enum LockedTreatment {
    /// Render nothing at all.
    Hidden,
    /// Render the surface's own fallback markup.
    CustomFallback,
    /// Small lock badge in place of an inline affordance.
    InlineBadge,
    /// Full locked card advertising the upgrade target.
    FullCard {
        /// Lowest tier that would unlock the surface; the card shows this
        /// tier's catalog name and price plus an upgrade link.
        upgrade_tier: SubscriptionTier,
    },
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    /// Render children.
    Allow,
    /// Render the locked treatment instead.
    Deny(LockedTreatment),
}

impl GateDecision {
    /// Whether the gate allowed access.
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Catalog plan for the full-card upgrade target, when one applies.
    #[must_use]
    pub fn upgrade_plan(self) -> Option<&'static TierPlan> {
        match self {
            Self::Deny(LockedTreatment::FullCard { upgrade_tier }) => Some(plan(upgrade_tier)),
            _ => None,
        }
    }
}

/// Evaluates a gate.
///
/// Access resolution order: feature constraint, then tier-set constraint,
/// then unrestricted — the only place where the absence of constraints is
/// permissive. Both constraint paths fail closed on an absent or inactive
/// subscription.
///
/// On deny, the treatment is chosen by: `hide_when_locked`, then the custom
/// fallback, then inline badge vs. full card. The full card's upgrade tier
/// is the lowest tier in the requirement set; when the gate was constrained
/// by a feature key alone, it is the feature's true minimum tier from the
/// catalog.
///
/// # Examples
///
/// ```
/// use shopflow_gate::{
///     catalog::FeatureKey,
///     entitlement::{GateDecision, GateInput, evaluate_gate},
/// };
///
/// let input = GateInput {
///     feature: Some(FeatureKey::WinnerScaling),
///     subscription: None, // not yet loaded: fails closed
///     ..GateInput::default()
/// };
///
/// assert!(!evaluate_gate(&input).is_allowed());
/// ```
#[must_use]
pub fn evaluate_gate(input: &GateInput<'_>) -> GateDecision {
    let has_access = if let Some(feature) = input.feature {
        can_use_feature(input.subscription, feature)
    } else if let Some(ref required) = input.required {
        has_required_tier(input.subscription, required)
    } else {
        true
    };

    if has_access {
        return GateDecision::Allow;
    }
    if input.hide_when_locked {
        return GateDecision::Deny(LockedTreatment::Hidden);
    }
    if input.has_custom_fallback {
        return GateDecision::Deny(LockedTreatment::CustomFallback);
    }
    if input.inline {
        return GateDecision::Deny(LockedTreatment::InlineBadge);
    }

    let upgrade_tier = match (&input.required, input.feature) {
        (Some(required), _) => required.minimum(),
        (None, Some(feature)) => feature.min_tier(),
        // Unreachable in practice: no constraints means has_access above.
        (None, None) => SubscriptionTier::Premium,
    };
    GateDecision::Deny(LockedTreatment::FullCard { upgrade_tier })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitlement::subscription::SubscriptionStatus;

    fn sub(tier: SubscriptionTier, status: SubscriptionStatus) -> Subscription {
        Subscription { tier, status, current_period_end: None, trial_end: None }
    }

    // ========================================================================
    // Access Resolution Tests
    // ========================================================================

    #[test]
    fn test_no_constraints_allows() {
        // Step 3: neither feature nor tier given, even without a snapshot.
        let decision = evaluate_gate(&GateInput::default());
        assert_eq!(decision, GateDecision::Allow);
    }

    #[test]
    fn test_feature_gate_allows_sufficient_tier() {
        let premium = sub(SubscriptionTier::Premium, SubscriptionStatus::Active);
        let input = GateInput {
            feature: Some(FeatureKey::WinnerScaling),
            subscription: Some(&premium),
            ..GateInput::default()
        };
        assert!(evaluate_gate(&input).is_allowed());
    }

    #[test]
    fn test_feature_takes_precedence_over_tier_list() {
        // Feature requires Vip; the tier list alone would pass at Basis.
        let premium = sub(SubscriptionTier::Premium, SubscriptionStatus::Active);
        let input = GateInput {
            feature: Some(FeatureKey::AllPlatforms),
            required: Some(TierRequirement::single(SubscriptionTier::Basis)),
            subscription: Some(&premium),
            ..GateInput::default()
        };
        assert!(!evaluate_gate(&input).is_allowed());
    }

    #[test]
    fn test_unloaded_subscription_fails_closed() {
        let input = GateInput {
            required: Some(TierRequirement::single(SubscriptionTier::Basis)),
            subscription: None,
            ..GateInput::default()
        };
        assert!(!evaluate_gate(&input).is_allowed());
    }

    // ========================================================================
    // Treatment Selection Tests
    // ========================================================================

    #[test]
    fn test_hide_when_locked_wins_over_fallback() {
        let input = GateInput {
            feature: Some(FeatureKey::WinnerScaling),
            hide_when_locked: true,
            has_custom_fallback: true,
            inline: true,
            ..GateInput::default()
        };
        assert_eq!(evaluate_gate(&input), GateDecision::Deny(LockedTreatment::Hidden));
    }

    #[test]
    fn test_custom_fallback_wins_over_badge_and_card() {
        let input = GateInput {
            feature: Some(FeatureKey::WinnerScaling),
            has_custom_fallback: true,
            inline: true,
            ..GateInput::default()
        };
        assert_eq!(evaluate_gate(&input), GateDecision::Deny(LockedTreatment::CustomFallback));
    }

    #[test]
    fn test_inline_deny_is_badge() {
        let input = GateInput {
            feature: Some(FeatureKey::WinnerScaling),
            inline: true,
            ..GateInput::default()
        };
        assert_eq!(evaluate_gate(&input), GateDecision::Deny(LockedTreatment::InlineBadge));
    }

    #[test]
    fn test_full_card_uses_lowest_required_tier() {
        let basis = sub(SubscriptionTier::Basis, SubscriptionStatus::Active);
        let input = GateInput {
            required: Some(
                TierRequirement::any_of([SubscriptionTier::Vip, SubscriptionTier::Premium])
                    .unwrap(),
            ),
            subscription: Some(&basis),
            ..GateInput::default()
        };
        assert_eq!(
            evaluate_gate(&input),
            GateDecision::Deny(LockedTreatment::FullCard {
                upgrade_tier: SubscriptionTier::Premium
            })
        );
    }

    #[test]
    fn test_full_card_resolves_feature_minimum_from_catalog() {
        // A Vip-gated feature advertises Vip, not a hardcoded default.
        let premium = sub(SubscriptionTier::Premium, SubscriptionStatus::Active);
        let input = GateInput {
            feature: Some(FeatureKey::OneOnOneSupport),
            subscription: Some(&premium),
            ..GateInput::default()
        };
        assert_eq!(
            evaluate_gate(&input),
            GateDecision::Deny(LockedTreatment::FullCard { upgrade_tier: SubscriptionTier::Vip })
        );
    }

    #[test]
    fn test_upgrade_plan_exposes_catalog_entry() {
        let input = GateInput { feature: Some(FeatureKey::WinnerScaling), ..GateInput::default() };
        let decision = evaluate_gate(&input);
        let plan = decision.upgrade_plan().expect("full card carries a plan");
        assert_eq!(plan.name, "Premium");
    }

    #[test]
    fn test_gate_is_idempotent() {
        let trialing = sub(SubscriptionTier::Basis, SubscriptionStatus::Trialing);
        let input = GateInput {
            feature: Some(FeatureKey::AdvancedAnalytics),
            subscription: Some(&trialing),
            ..GateInput::default()
        };
        assert_eq!(evaluate_gate(&input), evaluate_gate(&input));
    }
}
