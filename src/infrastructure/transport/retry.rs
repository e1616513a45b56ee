//! # Retry Policy
//!
//! Bounded, immediate retries over a fallible attempt.
//!
//! Every failed attempt consumes one of `max_attempts`. What happens next is
//! decided by [`RetryPolicy::decide`] from the error kind and the attempts
//! left:
//!
//! | Error                 | Attempts left | `retry_safe` | Decision                  |
//! |-----------------------|---------------|--------------|---------------------------|
//! | `RetriableConnection` | > 0           | any          | retry                     |
//! | `RetriableConnection` | 0             | any          | fail with `Connection`    |
//! | `Connection`          | > 0           | true         | retry                     |
//! | `Connection`          | any           | false        | fail with the same error  |
//! | anything else         | any           | any          | fail with the same error  |
//!
//! There is no backoff between attempts.

use crate::infrastructure::transport::config::{MAX_ATTEMPTS, TransportConfig};
use crate::infrastructure::transport::error::{TransportError, TransportResult};
use tracing::{debug, warn};

/// What to do after a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Run the attempt again.
    Retry,
    /// Stop and surface this error.
    Fail(TransportError),
}

/// Retry settings for one request.
///
/// # Examples
///
/// ```
/// use freightquote::infrastructure::transport::error::TransportError;
/// use freightquote::infrastructure::transport::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, false);
/// let mut calls = 0;
/// let result = policy.run(|_| {
///     calls += 1;
///     if calls < 3 { Err(TransportError::refused()) } else { Ok("body") }
/// });
///
/// assert_eq!(result, Ok("body"));
/// assert_eq!(calls, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    retry_safe: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS, false)
    }
}

impl RetryPolicy {
    /// Creates a policy allowing `max_attempts` attempts in total.
    #[must_use]
    pub fn new(max_attempts: u32, retry_safe: bool) -> Self {
        Self {
            max_attempts,
            retry_safe,
        }
    }

    /// Creates a policy from transport settings.
    #[must_use]
    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(config.max_attempts(), config.retry_safe())
    }

    /// Returns the total number of attempts allowed.
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns whether unsafe failures are retried.
    #[inline]
    #[must_use]
    pub fn retry_safe(&self) -> bool {
        self.retry_safe
    }

    /// Decides whether to retry after `error`, given the attempts left.
    #[must_use]
    pub fn decide(&self, error: TransportError, remaining: u32) -> RetryDecision {
        match error {
            TransportError::RetriableConnection { message } => {
                if remaining > 0 {
                    RetryDecision::Retry
                } else {
                    RetryDecision::Fail(TransportError::connection(message))
                }
            }
            error @ TransportError::Connection { .. } => {
                if self.retry_safe && remaining > 0 {
                    RetryDecision::Retry
                } else {
                    RetryDecision::Fail(error)
                }
            }
            error => RetryDecision::Fail(error),
        }
    }

    /// Runs `attempt` until it succeeds or the policy gives up.
    ///
    /// The closure receives the 1-based attempt number.
    ///
    /// # Errors
    ///
    /// Returns the error chosen by [`decide`](Self::decide) once no further
    /// attempt is allowed.
    pub fn run<T, F>(&self, mut attempt: F) -> TransportResult<T>
    where
        F: FnMut(u32) -> TransportResult<T>,
    {
        let mut remaining = self.max_attempts;
        let mut number = 0;
        loop {
            number += 1;
            debug!(attempt = number, "sending request");
            let error = match attempt(number) {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };
            remaining = remaining.saturating_sub(1);
            warn!(attempt = number, remaining, error = %error, "request attempt failed");
            match self.decide(error, remaining) {
                RetryDecision::Retry => continue,
                RetryDecision::Fail(error) => return Err(error),
            }
        }
    }
}
