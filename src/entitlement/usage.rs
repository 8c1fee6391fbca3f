//! Usage-limit evaluation against catalog caps.
//!
//! Caps use a sentinel convention: any non-finite or negative `max` means
//! unlimited. The sentinel is checked before any arithmetic, so division by
//! zero or by the sentinel is structurally impossible.

use serde::{Deserialize, Serialize};

use crate::catalog::SubscriptionTier;

/// Percentage at which a limit counts as "near".
pub const NEAR_LIMIT_THRESHOLD: f64 = 80.0;

/// Per-shop usage counters reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounts {
    /// Niches generated this billing month.
    pub niches: u64,
    /// Products generated this billing month.
    pub products: u64,
}

/// A usage counter paired with its cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageLimit {
    /// Current usage, always non-negative.
    pub current: u64,
    /// Cap; non-finite or negative means unlimited.
    pub max: f64,
}

impl UsageLimit {
    /// Evaluates this limit. See [`evaluate_limit`].
    #[must_use]
    pub fn evaluate(self) -> LimitEvaluation {
        evaluate_limit(self.current, self.max)
    }
}

/// Result of evaluating a usage counter against its cap.
///
/// `is_near_limit` and `is_at_limit` are computed independently — an
/// at-limit counter also satisfies the near-limit threshold. Presentation
/// layers must check at-limit first when choosing a single message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LimitEvaluation {
    /// Usage as a percentage of the cap, capped at 100. Zero when unlimited.
    pub percentage: f64,
    /// Usage is at or above [`NEAR_LIMIT_THRESHOLD`] percent of the cap.
    pub is_near_limit: bool,
    /// Usage has reached the cap.
    pub is_at_limit: bool,
    /// The cap is the unlimited sentinel.
    pub is_unlimited: bool,
}

/// Evaluates a usage counter against its cap.
///
/// An unlimited cap can never be near or at limit. Note `max == 0.0` is a
/// real (if degenerate) cap: `current >= 0` always holds, so it reports
/// at-limit immediately and the percentage never reaches a division.
///
/// # Examples
///
/// ```
/// use shopflow_gate::entitlement::evaluate_limit;
///
/// let eval = evaluate_limit(8, 10.0);
/// assert!(eval.is_near_limit);
/// assert!(!eval.is_at_limit);
///
/// let eval = evaluate_limit(999, -1.0);
/// assert!(eval.is_unlimited);
/// assert!(!eval.is_at_limit);
/// ```
#[must_use]
pub fn evaluate_limit(current: u64, max: f64) -> LimitEvaluation {
    if !max.is_finite() || max < 0.0 {
        return LimitEvaluation {
            percentage: 0.0,
            is_near_limit: false,
            is_at_limit: false,
            is_unlimited: true,
        };
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "usage counters stay far below 2^52"
    )]
    let current = current as f64;

    let is_at_limit = current >= max;
    let percentage = if max == 0.0 {
        100.0
    } else {
        (current / max * 100.0).min(100.0)
    };

    LimitEvaluation {
        percentage,
        is_near_limit: percentage >= NEAR_LIMIT_THRESHOLD,
        is_at_limit,
        is_unlimited: false,
    }
}

/// Whether a near-limit state should prompt an upgrade.
///
/// VIP is the ceiling tier and is never prompted to upgrade further.
#[must_use]
pub fn should_prompt_upgrade(
    tier: SubscriptionTier,
    niches_near_limit: bool,
    products_near_limit: bool,
) -> bool {
    tier != SubscriptionTier::Vip && (niches_near_limit || products_near_limit)
}
