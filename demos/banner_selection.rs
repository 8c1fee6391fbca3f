//! Banner precedence walkthrough.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example banner_selection
//! ```

#![allow(
    clippy::print_stdout,
    reason = "examples are allowed to use println"
)]

use shopflow_gate::{
    catalog::SubscriptionTier,
    entitlement::{
        DismissedBanners, Subscription, SubscriptionStatus, notice_for, select_banner,
    },
};

fn sub(status: SubscriptionStatus) -> Subscription {
    Subscription {
        tier: SubscriptionTier::Premium,
        status,
        current_period_end: None,
        trial_end: None,
    }
}

fn show(label: &str, subscription: Option<&Subscription>, is_past_due: bool, days: Option<i64>) {
    match select_banner(subscription, is_past_due, days) {
        Some(banner) => {
            let notice = notice_for(banner, days);
            println!(
                "   {label}: [{}] {} — {} (dismissible: {})",
                notice.severity.color_class(),
                notice.title,
                notice.description,
                notice.dismissible
            );
        }
        None => println!("   {label}: no banner"),
    }
}

fn main() {
    println!("Shopflow Gate: banner selection walkthrough\n");

    println!("Example 1: the four notices");
    show("no record   ", None, false, None);
    show("past due    ", Some(&sub(SubscriptionStatus::PastDue)), true, None);
    show("canceled    ", Some(&sub(SubscriptionStatus::Canceled)), false, Some(12));
    show("trial ending", Some(&sub(SubscriptionStatus::Trialing)), false, Some(2));

    println!("\nExample 2: precedence — canceled with a failed payment");
    show("combined    ", Some(&sub(SubscriptionStatus::Canceled)), true, Some(12));

    println!("\nExample 3: boundary — 4 days left suppresses, 3 fires");
    show("4 days      ", Some(&sub(SubscriptionStatus::Trialing)), false, Some(4));
    show("3 days      ", Some(&sub(SubscriptionStatus::Trialing)), false, Some(3));

    println!("\nExample 4: dismissal never hides the past-due notice");
    let mut session = DismissedBanners::new();
    session.dismiss(shopflow_gate::entitlement::BannerType::PastDue);
    let visible = session.visible_notice(Some(&sub(SubscriptionStatus::PastDue)), true, None);
    println!("   still visible: {}", visible.is_some());
}
