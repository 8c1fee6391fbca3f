//! Entitlement core: access resolution, usage limits, notices, and the gate
//! presentation contract.
//!
//! Everything in this module is synchronous and side-effect-free; the data
//! layer feeds it snapshots and the presentation layer renders its
//! decisions.

pub mod banner;
pub mod gate;
pub mod resolver;
pub mod subscription;
pub mod usage;

pub use banner::{
    BannerAction, BannerIcon, BannerNotice, BannerSeverity, BannerType, DismissedBanners,
    TRIAL_ENDING_THRESHOLD_DAYS, notice_for, select_banner,
};
pub use gate::{GateDecision, GateInput, LockedTreatment, evaluate_gate};
pub use resolver::{TierRequirement, can_use_feature, has_required_tier};
pub use subscription::{Subscription, SubscriptionStatus};
pub use usage::{
    LimitEvaluation, NEAR_LIMIT_THRESHOLD, UsageCounts, UsageLimit, evaluate_limit,
    should_prompt_upgrade,
};
