//! Exponential backoff retry for idempotent snapshot reads.
//!
//! Only the snapshot refresh path retries, and only on transient transport
//! failures — portal and checkout launches are mutating from the user's
//! point of view and must surface their first failure for a manual retry.

use std::time::Duration;

use crate::error::GateError;

/// Configuration for retry behavior.
///
/// The delay between attempts grows exponentially up to a maximum value.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first (default: 3).
    pub max_attempts: u32,
    /// Delay before the second attempt (default: 100ms).
    pub initial_delay: Duration,
    /// Ceiling on any single delay (default: 5s).
    pub max_delay: Duration,
    /// Multiplier applied per attempt (default: 2.0).
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries — every failure surfaces immediately.
    #[must_use]
    pub fn no_retries() -> Self {
        Self { max_attempts: 1, ..Self::default() }
    }

    /// Delay before retrying after `attempt` (zero-based) failed attempts.
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "delays are small positive millisecond counts"
        )]
        let delay_ms = (self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt.min(i32::MAX as u32) as i32))
            as u64;
        Duration::from_millis(delay_ms).min(self.max_delay)
    }
}

/// Whether an error is worth retrying.
///
/// Only transport-level failures qualify; backend rejections, validation
/// errors, and configuration errors will not get better by asking again.
#[must_use]
pub fn is_transient(error: &GateError) -> bool {
    matches!(error, GateError::HttpError(_))
}

/// Executes `operation` with exponential backoff.
///
/// Retries up to `policy.max_attempts` total attempts, but only while
/// `retryable` approves the error; a non-retryable error returns
/// immediately.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// use shopflow_gate::reliability::{RetryPolicy, retry_with_backoff};
///
/// # async fn example() -> Result<u32, String> {
/// let attempts = AtomicU32::new(0);
/// let value = retry_with_backoff(
///     &RetryPolicy::default(),
///     |_| true,
///     || async {
///         if attempts.fetch_add(1, Ordering::Relaxed) < 2 {
///             Err("flaky".to_owned())
///         } else {
///             Ok(7)
///         }
///     },
/// )
/// .await?;
/// assert_eq!(value, 7);
/// # Ok(value)
/// # }
/// ```
///
/// # Errors
///
/// Returns the last error once attempts are exhausted, or the first
/// non-retryable error.
///
/// # Panics
///
/// Panics if `policy.max_attempts` is 0; always configure at least one
/// attempt.
#[allow(clippy::missing_panics_doc, reason = "panic documented above")]
pub async fn retry_with_backoff<F, Fut, T, E, P>(
    policy: &RetryPolicy,
    retryable: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    assert!(policy.max_attempts > 0, "RetryPolicy.max_attempts must be at least 1");

    let mut last_error = None;

    for attempt in 0..policy.max_attempts {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::info!(attempt = attempt + 1, "snapshot read succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) => {
                if !retryable(&error) {
                    return Err(error);
                }
                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts = policy.max_attempts,
                    error = %error,
                    "snapshot read failed"
                );
                last_error = Some(error);
                if attempt + 1 < policy.max_attempts {
                    tokio::time::sleep(policy.delay_for_attempt(attempt)).await;
                }
            }
        }
    }

    Err(last_error.expect("at least one attempt was made"))
}
