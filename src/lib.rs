//! Shopflow Gate: subscription entitlement and access gating for the
//! Shopflow e-commerce automation platform.
//!
//! The billing backend owns every subscription and usage record; this crate
//! owns the *decisions* the front-end makes over read-only snapshots of
//! them: which features a shop may use, how close it is to its usage caps,
//! which (single) subscription notice to show, and how a locked surface
//! should present itself.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Billing backend │  subscriptions, usage counters, Stripe, portal
//! └────────┬─────────┘
//!          │ HTTPS (bearer token)
//! ┌────────▼─────────────────────────────────────────┐
//! │            shopflow-gate (this crate)            │
//! │  ┌─────────────┐        ┌─────────────────────┐  │
//! │  │ data layer  │ snap-  │   entitlement core  │  │
//! │  │ fetch+cache │─shots─►│  resolver · limits  │  │
//! │  │ invalidate  │        │  banners · gate     │  │
//! │  └─────────────┘        └─────────────────────┘  │
//! └────────┬─────────────────────────────────────────┘
//!          │ decisions
//! ┌────────▼─────────┐
//! │ Presentation UI  │  renders children or locked treatment
//! └──────────────────┘
//! ```
//!
//! The entitlement core is pure and synchronous; every suspension point
//! lives in the [`data`] layer. Anything not yet loaded reaches the core as
//! `None` and **fails closed** — a feature never appears unlocked until the
//! backend confirms it.
//!
//! # Quick Start
//!
//! ## Gate a surface on a feature
//!
//! ```
//! use shopflow_gate::{
//!     catalog::{FeatureKey, SubscriptionTier},
//!     entitlement::{
//!         GateInput, Subscription, SubscriptionStatus, evaluate_gate,
//!     },
//! };
//!
//! let subscription = Subscription {
//!     tier: SubscriptionTier::Basis,
//!     status: SubscriptionStatus::Active,
//!     current_period_end: None,
//!     trial_end: None,
//! };
//!
//! let decision = evaluate_gate(&GateInput {
//!     feature: Some(FeatureKey::WinnerScaling),
//!     subscription: Some(&subscription),
//!     ..GateInput::default()
//! });
//!
//! // Basis is below the feature's minimum tier: the locked card advertises
//! // the real upgrade target from the catalog.
//! assert!(!decision.is_allowed());
//! assert_eq!(decision.upgrade_plan().unwrap().name, "Premium");
//! ```
//!
//! ## Pick the active subscription notice
//!
//! ```
//! use shopflow_gate::entitlement::{BannerType, DismissedBanners, select_banner};
//!
//! // No subscription record yet (or still loading): one notice, never two.
//! assert_eq!(select_banner(None, false, None), Some(BannerType::NoSubscription));
//!
//! let dismissals = DismissedBanners::new();
//! let notice = dismissals.visible_notice(None, false, None).unwrap();
//! assert!(notice.dismissible);
//! ```
//!
//! ## Evaluate usage limits
//!
//! ```
//! use shopflow_gate::{
//!     catalog::{SubscriptionTier, plan},
//!     entitlement::{evaluate_limit, should_prompt_upgrade},
//! };
//!
//! let caps = plan(SubscriptionTier::Basis);
//! let niches = evaluate_limit(8, 10.0);
//! let products = evaluate_limit(100, caps.max_products);
//!
//! assert!(niches.is_near_limit);
//! assert!(products.is_at_limit);
//! assert!(should_prompt_upgrade(SubscriptionTier::Basis, niches.is_near_limit, false));
//! ```
//!
//! # Module Organization
//!
//! - [`catalog`]: static tier catalog and feature→tier map
//! - [`entitlement`]: the pure decision core (resolver, limits, banners,
//!   gate)
//! - [`data`]: async snapshot fetching, caching, invalidation, billing
//!   launchers
//! - [`shopify`]: typed client for the external Shopify proxy
//! - [`reliability`]: backoff retry for idempotent snapshot reads
//! - [`observability`]: tracing-subscriber initialization for host apps
//! - [`error`]: error taxonomy
//!
//! # Failure Semantics
//!
//! Missing data is not an error: an absent snapshot denies access, shows
//! the no-subscription notice, and nothing raises. Configuration defects
//! (a feature without a tier mapping) are compile errors by construction.
//! External-call failures surface as [`error::GateError`] values; only
//! idempotent snapshot reads retry automatically.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod data;
pub mod entitlement;
pub mod error;
pub mod observability;
pub mod reliability;
pub mod shopify;

pub use catalog::{FeatureKey, SubscriptionTier, TierPlan, plan};
pub use entitlement::{
    BannerNotice, BannerType, DismissedBanners, GateDecision, GateInput, LimitEvaluation,
    LockedTreatment, Subscription, SubscriptionStatus, TierRequirement, UsageCounts,
    can_use_feature, evaluate_gate, evaluate_limit, has_required_tier, select_banner,
    should_prompt_upgrade,
};
pub use error::{GateError, Result};
