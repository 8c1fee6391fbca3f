//! Gate decision walkthrough across tiers and treatments.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example gate_decisions
//! ```

#![allow(
    clippy::print_stdout,
    reason = "examples are allowed to use println"
)]

use shopflow_gate::{
    catalog::{FeatureKey, SubscriptionTier},
    entitlement::{
        GateDecision, GateInput, LockedTreatment, Subscription, SubscriptionStatus, evaluate_gate,
    },
};

fn describe(decision: GateDecision) -> String {
    match decision {
        GateDecision::Allow => "allow".to_owned(),
        GateDecision::Deny(LockedTreatment::Hidden) => "deny (hidden)".to_owned(),
        GateDecision::Deny(LockedTreatment::CustomFallback) => "deny (custom fallback)".to_owned(),
        GateDecision::Deny(LockedTreatment::InlineBadge) => "deny (inline badge)".to_owned(),
        GateDecision::Deny(LockedTreatment::FullCard { upgrade_tier }) => {
            let plan = shopflow_gate::catalog::plan(upgrade_tier);
            format!("deny (full card: upgrade to {} at {} {})", plan.name, plan.price, plan.currency)
        }
    }
}

fn main() {
    println!("Shopflow Gate: gate decision walkthrough\n");

    // Example 1: every tier against the winner-scaling feature.
    println!("Example 1: winner scaling by tier");
    for tier in SubscriptionTier::ALL {
        let sub = Subscription {
            tier,
            status: SubscriptionStatus::Active,
            current_period_end: None,
            trial_end: None,
        };
        let decision = evaluate_gate(&GateInput {
            feature: Some(FeatureKey::WinnerScaling),
            subscription: Some(&sub),
            ..GateInput::default()
        });
        println!("   {tier}: {}", describe(decision));
    }

    // Example 2: not-yet-loaded snapshot fails closed.
    println!("\nExample 2: snapshot still loading");
    let decision = evaluate_gate(&GateInput {
        feature: Some(FeatureKey::AdvancedAnalytics),
        subscription: None,
        ..GateInput::default()
    });
    println!("   {}", describe(decision));

    // Example 3: inline affordance hides instead of explaining.
    println!("\nExample 3: hidden menu entry");
    let decision = evaluate_gate(&GateInput {
        feature: Some(FeatureKey::AllPlatforms),
        hide_when_locked: true,
        ..GateInput::default()
    });
    println!("   {}", describe(decision));
}
