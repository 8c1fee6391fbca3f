//! Subscription notice (banner) selection and presentation payloads.
//!
//! At most one of four mutually exclusive notices is active at a time,
//! selected by fixed precedence over the subscription snapshot. Dismissal
//! state is ephemeral per presentation session — it resets on reload and
//! never hides a non-dismissible notice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entitlement::subscription::{Subscription, SubscriptionStatus};

/// Trial-ending notice fires at this many days remaining, inclusive.
pub const TRIAL_ENDING_THRESHOLD_DAYS: i64 = 3;

/// The four mutually exclusive notice types.
///
/// Suppression ("no banner") is `Option::<BannerType>::None`, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerType {
    /// A payment failed and the account is in its grace window.
    PastDue,
    /// The trial ends within [`TRIAL_ENDING_THRESHOLD_DAYS`] days.
    TrialEnding,
    /// No subscription record exists.
    NoSubscription,
    /// The subscription was canceled.
    Canceled,
}

/// Icon identity for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerIcon {
    /// Alert triangle (payment problems).
    AlertTriangle,
    /// Clock (time-bounded notices).
    Clock,
    /// Lock (no access).
    Lock,
    /// Crossed circle (terminated).
    XCircle,
}

/// Severity bucket; maps to a presentation color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerSeverity {
    /// Blocking problem, red treatment.
    Critical,
    /// Time-sensitive, amber treatment.
    Warning,
    /// Informational, neutral treatment.
    Info,
}

impl BannerSeverity {
    /// Presentation color class for this severity.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Warning => "amber",
            Self::Info => "slate",
        }
    }
}

/// Call-to-action attached to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerAction {
    /// Open the external billing portal (payment retry, reactivation).
    OpenBillingPortal,
    /// Go to checkout to start or restart a subscription.
    GoToCheckout,
}

/// Full presentation payload for one notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerNotice {
    /// Which notice this is.
    pub banner_type: BannerType,
    /// Icon identity.
    pub icon: BannerIcon,
    /// Severity bucket.
    pub severity: BannerSeverity,
    /// Title, with the day count interpolated where applicable.
    pub title: String,
    /// Supporting copy.
    pub description: String,
    /// Call-to-action.
    pub action: BannerAction,
    /// Whether the user may dismiss this notice for the session.
    ///
    /// False only for [`BannerType::PastDue`]: a failed-payment notice stays
    /// visible until resolved.
    pub dismissible: bool,
}

/// Selects the active notice, if any.
///
/// Precedence, first match wins, never combined:
/// 1. no subscription record → [`BannerType::NoSubscription`]
/// 2. `is_past_due` → [`BannerType::PastDue`]
/// 3. canceled → [`BannerType::Canceled`]
/// 4. trialing with at most [`TRIAL_ENDING_THRESHOLD_DAYS`] known days left
///    → [`BannerType::TrialEnding`]
/// 5. otherwise `None`.
///
/// `is_past_due` is taken explicitly rather than derived from `status`: the
/// billing backend can flag a failed payment on a record whose status has
/// already moved on (e.g. canceled), and rule 2 must still win.
#[must_use]
pub fn select_banner(
    subscription: Option<&Subscription>,
    is_past_due: bool,
    days_until_renewal: Option<i64>,
) -> Option<BannerType> {
    let Some(sub) = subscription else {
        return Some(BannerType::NoSubscription);
    };
    if is_past_due {
        return Some(BannerType::PastDue);
    }
    if sub.status == SubscriptionStatus::Canceled {
        return Some(BannerType::Canceled);
    }
    if sub.status == SubscriptionStatus::Trialing
        && let Some(days) = days_until_renewal
        && days <= TRIAL_ENDING_THRESHOLD_DAYS
    {
        return Some(BannerType::TrialEnding);
    }
    None
}

/// Builds the presentation payload for a selected notice.
///
/// `days_until_renewal` is interpolated into the trial-ending and canceled
/// titles when known.
#[must_use]
pub fn notice_for(banner: BannerType, days_until_renewal: Option<i64>) -> BannerNotice {
    match banner {
        BannerType::PastDue => BannerNotice {
            banner_type: banner,
            icon: BannerIcon::AlertTriangle,
            severity: BannerSeverity::Critical,
            title: "Payment failed".to_owned(),
            description: "Your last payment could not be processed. Update your payment \
                          method to keep your store automation running."
                .to_owned(),
            action: BannerAction::OpenBillingPortal,
            dismissible: false,
        },
        BannerType::TrialEnding => BannerNotice {
            banner_type: banner,
            icon: BannerIcon::Clock,
            severity: BannerSeverity::Warning,
            title: match days_until_renewal {
                Some(0) => "Your trial ends today".to_owned(),
                Some(1) => "Your trial ends in 1 day".to_owned(),
                Some(days) => format!("Your trial ends in {days} days"),
                None => "Your trial is ending".to_owned(),
            },
            description: "Choose a plan now to keep generating products without \
                          interruption."
                .to_owned(),
            action: BannerAction::GoToCheckout,
            dismissible: true,
        },
        BannerType::NoSubscription => BannerNotice {
            banner_type: banner,
            icon: BannerIcon::Lock,
            severity: BannerSeverity::Info,
            title: "No active subscription".to_owned(),
            description: "Pick a plan to connect your store and start generating products."
                .to_owned(),
            action: BannerAction::GoToCheckout,
            dismissible: true,
        },
        BannerType::Canceled => BannerNotice {
            banner_type: banner,
            icon: BannerIcon::XCircle,
            severity: BannerSeverity::Warning,
            title: match days_until_renewal {
                Some(0) => "Subscription canceled — access has ended".to_owned(),
                Some(1) => "Subscription canceled — access ends in 1 day".to_owned(),
                Some(days) => format!("Subscription canceled — access ends in {days} days"),
                None => "Subscription canceled".to_owned(),
            },
            description: "Reactivate from the billing portal to keep your campaigns and \
                          generated products."
                .to_owned(),
            action: BannerAction::OpenBillingPortal,
            dismissible: true,
        },
    }
}

/// Ephemeral, per-session dismissal state.
///
/// Owned by the presenting surface and passed in explicitly; nothing here is
/// persisted, so a reload starts clean.
#[derive(Debug, Clone, Default)]
pub struct DismissedBanners {
    dismissed: HashSet<BannerType>,
}

impl DismissedBanners {
    /// Fresh session with nothing dismissed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dismissal. Recording a non-dismissible type is harmless;
    /// [`visible_notice`](Self::visible_notice) ignores it.
    pub fn dismiss(&mut self, banner: BannerType) {
        self.dismissed.insert(banner);
    }

    /// Whether the user dismissed this type during the session.
    #[must_use]
    pub fn is_dismissed(&self, banner: BannerType) -> bool {
        self.dismissed.contains(&banner)
    }

    /// Selects the active notice and applies dismissal state.
    ///
    /// A dismissed notice is suppressed — unless it is non-dismissible, in
    /// which case prior dismissals are ignored and it stays visible.
    #[must_use]
    pub fn visible_notice(
        &self,
        subscription: Option<&Subscription>,
        is_past_due: bool,
        days_until_renewal: Option<i64>,
    ) -> Option<BannerNotice> {
        let banner = select_banner(subscription, is_past_due, days_until_renewal)?;
        let notice = notice_for(banner, days_until_renewal);
        if notice.dismissible && self.is_dismissed(banner) {
            return None;
        }
        Some(notice)
    }
}
