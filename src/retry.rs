//! Bounded retry with a per-attempt timeout.
//!
//! The retry behavior is expressed as a [`RetryPolicy`] value consumed by the
//! generic [`retry_with_timeout`] combinator, so the policy can be built from
//! configuration and the loop tested without a real store behind it.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Retry policy: attempt bound, per-attempt timeout, and fixed backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up.
    pub max_attempts: u32,
    /// Each attempt is raced against this timeout; losing the race aborts
    /// only that attempt, never the loop.
    pub attempt_timeout: Duration,
    /// Fixed wait between consecutive attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(15),
            backoff: Duration::from_secs(2),
        }
    }
}

/// Outcome of a single failed attempt.
#[derive(Debug, Error)]
pub enum AttemptError<E> {
    /// The operation returned an error.
    #[error("attempt failed: {0}")]
    Failed(E),

    /// The operation did not complete within the per-attempt timeout.
    #[error("attempt timed out after {0:?}")]
    TimedOut(Duration),
}

/// All attempts allowed by the policy failed.
#[derive(Debug, Error)]
#[error("operation failed after {attempts} attempts: {last}")]
pub struct RetryExhausted<E> {
    /// How many attempts were made.
    pub attempts: u32,
    /// The failure of the final attempt.
    pub last: AttemptError<E>,
}

/// Runs `operation` under `policy`, returning the first success.
///
/// Each attempt is raced against `policy.attempt_timeout` via
/// [`tokio::time::timeout`]; a timed-out attempt is dropped and counted as a
/// failure. Between attempts the loop sleeps for the fixed backoff. After
/// `max_attempts` failures the last failure is returned in
/// [`RetryExhausted`] rather than panicking or exiting.
///
/// # Errors
/// Returns [`RetryExhausted`] when every attempt failed or timed out.
pub async fn retry_with_timeout<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, RetryExhausted<E>>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1;

    loop {
        let outcome = match tokio::time::timeout(policy.attempt_timeout, operation()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => AttemptError::Failed(e),
            Err(_) => AttemptError::TimedOut(policy.attempt_timeout),
        };

        warn!(
            "Attempt {}/{} failed: {}",
            attempt, policy.max_attempts, outcome
        );

        if attempt >= policy.max_attempts {
            return Err(RetryExhausted {
                attempts: attempt,
                last: outcome,
            });
        }

        tokio::time::sleep(policy.backoff).await;
        attempt += 1;
    }
}
