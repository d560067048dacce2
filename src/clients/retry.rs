//! Retry policy for transport-level failures.

use std::time::Duration;

/// Longest delay ever slept between two attempts.
pub const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// How many times a failed send is retried, and how long to wait in between.
///
/// Only connection and read failures are retried; HTTP status codes never
/// are. Before retry `n` (1-based) the transport sleeps
/// `backoff_factor * 2^(n - 1)` seconds, capped at [`MAX_BACKOFF`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use reddit_place::clients::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, 0.25);
/// assert_eq!(policy.max_tries(), 4);
/// assert_eq!(policy.delay_for(1), Duration::from_millis(250));
/// assert_eq!(policy.delay_for(3), Duration::from_secs(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    retries: u32,
    backoff_factor: f64,
}

impl RetryPolicy {
    /// Creates a policy retrying up to `retries` times.
    ///
    /// Negative or non-finite backoff factors are treated as zero.
    #[must_use]
    pub fn new(retries: u32, backoff_factor: f64) -> Self {
        let backoff_factor = if backoff_factor.is_finite() && backoff_factor > 0.0 {
            backoff_factor
        } else {
            0.0
        };
        Self {
            retries,
            backoff_factor,
        }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            retries: 0,
            backoff_factor: 0.0,
        }
    }

    /// Returns the number of retries after the first attempt.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the backoff factor in seconds.
    #[must_use]
    pub fn backoff_factor(&self) -> f64 {
        self.backoff_factor
    }

    /// Returns `true` if no retry will ever be attempted.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.retries == 0
    }

    /// Returns the total number of attempts, first one included.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Returns the delay to sleep before retry number `retry` (1-based).
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        if self.backoff_factor == 0.0 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let seconds = self.backoff_factor * 2f64.powi(exponent);
        if !seconds.is_finite() || seconds >= MAX_BACKOFF.as_secs_f64() {
            return MAX_BACKOFF;
        }
        Duration::from_secs_f64(seconds)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
