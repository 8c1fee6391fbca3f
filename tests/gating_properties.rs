//! Property-based tests for the entitlement core.

use proptest::prelude::*;
use shopflow_gate::{
    catalog::{FeatureKey, SubscriptionTier},
    entitlement::{
        GateInput, Subscription, SubscriptionStatus, TierRequirement, can_use_feature,
        evaluate_gate, evaluate_limit, has_required_tier, select_banner,
    },
};

fn any_tier() -> impl Strategy<Value = SubscriptionTier> {
    prop_oneof![
        Just(SubscriptionTier::Basis),
        Just(SubscriptionTier::Premium),
        Just(SubscriptionTier::Vip),
    ]
}

fn any_status() -> impl Strategy<Value = SubscriptionStatus> {
    prop_oneof![
        Just(SubscriptionStatus::Active),
        Just(SubscriptionStatus::Trialing),
        Just(SubscriptionStatus::PastDue),
        Just(SubscriptionStatus::Canceled),
    ]
}

fn any_feature() -> impl Strategy<Value = FeatureKey> {
    prop_oneof![
        Just(FeatureKey::WinnerScaling),
        Just(FeatureKey::AdvancedAnalytics),
        Just(FeatureKey::MultiPlatform),
        Just(FeatureKey::AllPlatforms),
        Just(FeatureKey::PrioritySupport),
        Just(FeatureKey::OneOnOneSupport),
    ]
}

fn sub(tier: SubscriptionTier, status: SubscriptionStatus) -> Subscription {
    Subscription { tier, status, current_period_end: None, trial_end: None }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_inactive_status_always_denies(
        tier in any_tier(),
        status in any_status(),
        feature in any_feature(),
    ) {
        let snapshot = sub(tier, status);
        if !snapshot.is_active() {
            prop_assert!(!can_use_feature(Some(&snapshot), feature));
        }
    }

    #[test]
    fn prop_absent_subscription_always_denies(feature in any_feature()) {
        prop_assert!(!can_use_feature(None, feature));
    }

    #[test]
    fn prop_feature_access_is_monotone_in_tier(
        lower in any_tier(),
        higher in any_tier(),
        feature in any_feature(),
    ) {
        prop_assume!(lower < higher);
        let low = sub(lower, SubscriptionStatus::Active);
        let high = sub(higher, SubscriptionStatus::Active);
        // Whatever a lower tier can use, a higher tier can too.
        if can_use_feature(Some(&low), feature) {
            prop_assert!(can_use_feature(Some(&high), feature));
        }
    }

    #[test]
    fn prop_requirement_satisfied_by_its_own_minimum(
        tiers in proptest::collection::vec(any_tier(), 1..4),
    ) {
        let required = TierRequirement::any_of(tiers).unwrap();
        let snapshot = sub(required.minimum(), SubscriptionStatus::Active);
        prop_assert!(has_required_tier(Some(&snapshot), &required));
    }

    #[test]
    fn prop_gate_is_idempotent(
        tier in any_tier(),
        status in any_status(),
        feature in proptest::option::of(any_feature()),
        inline in any::<bool>(),
        hide_when_locked in any::<bool>(),
        has_custom_fallback in any::<bool>(),
    ) {
        let snapshot = sub(tier, status);
        let input = GateInput {
            feature,
            required: None,
            inline,
            hide_when_locked,
            has_custom_fallback,
            subscription: Some(&snapshot),
        };
        prop_assert_eq!(evaluate_gate(&input), evaluate_gate(&input));
    }

    #[test]
    fn prop_limit_flags_are_consistent(current in 0_u64..10_000, max in -100.0_f64..10_000.0) {
        let eval = evaluate_limit(current, max);
        // Unlimited excludes both flags.
        if eval.is_unlimited {
            prop_assert!(!eval.is_near_limit);
            prop_assert!(!eval.is_at_limit);
        }
        // At-limit always satisfies the near-limit threshold.
        if eval.is_at_limit {
            prop_assert!(eval.is_near_limit);
        }
        prop_assert!((0.0..=100.0).contains(&eval.percentage));
    }

    #[test]
    fn prop_past_due_flag_always_wins_over_status(
        tier in any_tier(),
        status in any_status(),
        days in proptest::option::of(0_i64..30),
    ) {
        let snapshot = sub(tier, status);
        let banner = select_banner(Some(&snapshot), true, days);
        prop_assert_eq!(banner, Some(shopflow_gate::entitlement::BannerType::PastDue));
    }

    #[test]
    fn prop_at_most_one_banner(
        tier in any_tier(),
        status in any_status(),
        is_past_due in any::<bool>(),
        days in proptest::option::of(-5_i64..40),
    ) {
        // select_banner returns an Option: zero or one notice by type.
        // The interesting invariant is stability — the same snapshot always
        // picks the same notice.
        let snapshot = sub(tier, status);
        let first = select_banner(Some(&snapshot), is_past_due, days);
        let second = select_banner(Some(&snapshot), is_past_due, days);
        prop_assert_eq!(first, second);
    }
}
