//! Static tier catalog: plan levels, prices, feature lists, and usage caps.
//!
//! The catalog is total by construction — every [`SubscriptionTier`] has a
//! plan and every [`FeatureKey`] has a minimum tier, enforced by exhaustive
//! matches rather than runtime lookups. Adding a tier or feature variant
//! fails compilation until every consuming match is updated.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription plan level.
///
/// Totally ordered: `Basis < Premium < Vip`. The declaration order is the
/// ordering basis for "minimum tier required" checks, so `Ord` can be
/// derived directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Entry plan.
    Basis,
    /// Mid plan; unlocks analytics and scaling features.
    Premium,
    /// Ceiling plan; never prompted to upgrade further.
    Vip,
}

impl SubscriptionTier {
    /// All tiers in ascending order.
    pub const ALL: [Self; 3] = [Self::Basis, Self::Premium, Self::Vip];

    /// Position in the total order (`Basis` = 0, `Premium` = 1, `Vip` = 2).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Basis => 0,
            Self::Premium => 1,
            Self::Vip => 2,
        }
    }

    /// Wire/display identifier (`basis`, `premium`, `vip`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basis => "basis",
            Self::Premium => "premium",
            Self::Vip => "vip",
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for a gated capability.
///
/// Closed enumeration; the backend serializes these in camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    /// Winner-scaling analytics surface.
    WinnerScaling,
    /// Advanced campaign analytics.
    AdvancedAnalytics,
    /// Campaigns on more than one ad platform.
    MultiPlatform,
    /// Campaigns on every supported ad platform.
    AllPlatforms,
    /// Priority support queue.
    PrioritySupport,
    /// Dedicated 1-on-1 support sessions.
    OneOnOneSupport,
}

impl FeatureKey {
    /// Minimum tier required to use this feature.
    ///
    /// Total over the enum; a missing entry is a compile error, never a
    /// runtime fallback.
    #[must_use]
    pub const fn min_tier(self) -> SubscriptionTier {
        match self {
            Self::WinnerScaling
            | Self::AdvancedAnalytics
            | Self::MultiPlatform
            | Self::PrioritySupport => SubscriptionTier::Premium,
            Self::AllPlatforms | Self::OneOnOneSupport => SubscriptionTier::Vip,
        }
    }
}

/// Catalog entry for one plan level.
///
/// Immutable after initialization; handed out as `&'static` references from
/// [`plan`].
#[derive(Debug, Clone, Serialize)]
pub struct TierPlan {
    /// Display name.
    pub name: &'static str,
    /// Monthly price.
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub currency: &'static str,
    /// Marketing feature list, in display order.
    pub features: &'static [&'static str],
    /// Niches-per-month cap. Non-finite or negative means unlimited.
    pub max_niches: f64,
    /// Products-per-month cap. Same sentinel convention as `max_niches`.
    pub max_products: f64,
}

static BASIS_PLAN: LazyLock<TierPlan> = LazyLock::new(|| TierPlan {
    name: "Basis",
    price: Decimal::new(2900, 2),
    currency: "EUR",
    features: &[
        "AI product generation",
        "1-click Shopify import",
        "Basic store analytics",
        "Email support",
    ],
    max_niches: 3.0,
    max_products: 100.0,
});

static PREMIUM_PLAN: LazyLock<TierPlan> = LazyLock::new(|| TierPlan {
    name: "Premium",
    price: Decimal::new(7900, 2),
    currency: "EUR",
    features: &[
        "Everything in Basis",
        "Winner scaling",
        "Advanced analytics",
        "Multi-platform campaigns",
        "Priority support",
    ],
    max_niches: 10.0,
    max_products: 500.0,
});

static VIP_PLAN: LazyLock<TierPlan> = LazyLock::new(|| TierPlan {
    name: "VIP",
    price: Decimal::new(19900, 2),
    currency: "EUR",
    features: &[
        "Everything in Premium",
        "All ad platforms",
        "1-on-1 support",
        "Unlimited niches and products",
    ],
    max_niches: f64::INFINITY,
    max_products: f64::INFINITY,
});

/// Returns the catalog entry for a tier.
///
/// Total, no error path — every tier has an entry.
#[must_use]
pub fn plan(tier: SubscriptionTier) -> &'static TierPlan {
    match tier {
        SubscriptionTier::Basis => &BASIS_PLAN,
        SubscriptionTier::Premium => &PREMIUM_PLAN,
        SubscriptionTier::Vip => &VIP_PLAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Tier Ordering Tests
    // ========================================================================

    #[test]
    fn test_tier_total_order() {
        assert!(SubscriptionTier::Basis < SubscriptionTier::Premium);
        assert!(SubscriptionTier::Premium < SubscriptionTier::Vip);
        assert!(SubscriptionTier::Basis < SubscriptionTier::Vip);
    }

    #[test]
    fn test_tier_rank_matches_order() {
        for pair in SubscriptionTier::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_tier_serialization() {
        let json = serde_json::to_string(&SubscriptionTier::Basis).unwrap();
        assert_eq!(json, "\"basis\"");
        let parsed: SubscriptionTier = serde_json::from_str("\"vip\"").unwrap();
        assert_eq!(parsed, SubscriptionTier::Vip);
    }

    // ========================================================================
    // Feature Key Tests
    // ========================================================================

    #[test]
    fn test_feature_key_serialization_is_camel_case() {
        let json = serde_json::to_string(&FeatureKey::WinnerScaling).unwrap();
        assert_eq!(json, "\"winnerScaling\"");
        let json = serde_json::to_string(&FeatureKey::OneOnOneSupport).unwrap();
        assert_eq!(json, "\"oneOnOneSupport\"");
    }

    #[test]
    fn test_every_feature_has_a_tier_above_basis() {
        // No feature is gated at the entry tier; gating a Basis-level
        // capability would make the gate a no-op for every subscriber.
        let features = [
            FeatureKey::WinnerScaling,
            FeatureKey::AdvancedAnalytics,
            FeatureKey::MultiPlatform,
            FeatureKey::AllPlatforms,
            FeatureKey::PrioritySupport,
            FeatureKey::OneOnOneSupport,
        ];
        for feature in features {
            assert!(feature.min_tier() > SubscriptionTier::Basis);
        }
    }

    #[test]
    fn test_vip_features_require_vip() {
        assert_eq!(FeatureKey::AllPlatforms.min_tier(), SubscriptionTier::Vip);
        assert_eq!(FeatureKey::OneOnOneSupport.min_tier(), SubscriptionTier::Vip);
    }

    // ========================================================================
    // Plan Catalog Tests
    // ========================================================================

    #[test]
    fn test_plan_is_total_over_tiers() {
        for tier in SubscriptionTier::ALL {
            let entry = plan(tier);
            assert!(!entry.name.is_empty());
            assert!(!entry.features.is_empty());
            assert!(entry.price > Decimal::ZERO);
        }
    }

    #[test]
    fn test_plan_prices_increase_with_tier() {
        assert!(plan(SubscriptionTier::Basis).price < plan(SubscriptionTier::Premium).price);
        assert!(plan(SubscriptionTier::Premium).price < plan(SubscriptionTier::Vip).price);
    }

    #[test]
    fn test_vip_caps_are_unlimited_sentinels() {
        let vip = plan(SubscriptionTier::Vip);
        assert!(!vip.max_niches.is_finite());
        assert!(!vip.max_products.is_finite());
    }

    #[test]
    fn test_finite_caps_increase_with_tier() {
        let basis = plan(SubscriptionTier::Basis);
        let premium = plan(SubscriptionTier::Premium);
        assert!(basis.max_niches < premium.max_niches);
        assert!(basis.max_products < premium.max_products);
    }
}
