//! Bounded exponential-backoff execution.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ClientError;

/// Backoff policy for retrying transient CRM failures. Immutable per
/// call; each retry run owns its delay and attempt counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Delay before the first retry, in milliseconds.
    pub initial_delay_ms: u64,
    /// Total attempt budget. Must be at least 1.
    pub max_retries: u32,
    /// Factor applied to the delay after each failed attempt.
    pub multiplier: u32,
    /// HTTP status codes eligible for retry; anything else re-raises
    /// immediately.
    pub retryable_status_codes: Vec<u16>,
}

impl Default for RetryPolicy {
    /// One second initial delay, five attempts, doubling backoff,
    /// retrying the transient 5xx family.
    fn default() -> Self {
        Self {
            initial_delay_ms: 1_000,
            max_retries: 5,
            multiplier: 2,
            retryable_status_codes: vec![500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    fn is_retryable(&self, status: u16) -> bool {
        self.retryable_status_codes.contains(&status)
    }
}

/// Run `operation` under `policy`.
///
/// Success at any attempt returns immediately with no residual delay.
/// A failure whose status is not in the policy's retryable set
/// re-raises immediately without consuming the remaining budget. Once
/// the budget is spent, the last failure is wrapped in
/// [`ClientError::RetriesExhausted`] with the attempt count.
pub async fn run_with_retry<T, F, Fut>(
    mut operation: F,
    policy: &RetryPolicy,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    if policy.max_retries == 0 {
        return Err(ClientError::InvalidRetryPolicy {
            reason: "max_retries must be at least 1".to_string(),
        });
    }

    let mut delay = Duration::from_millis(policy.initial_delay_ms);
    for attempt in 1..=policy.max_retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                let status = match error.status() {
                    Some(status) if policy.is_retryable(status) => status,
                    _ => return Err(error),
                };
                warn!(
                    status,
                    attempt,
                    max_retries = policy.max_retries,
                    "retryable CRM failure"
                );
                if attempt == policy.max_retries {
                    return Err(ClientError::RetriesExhausted {
                        count: attempt,
                        last: Box::new(error),
                    });
                }
                debug!(delay_ms = delay.as_millis() as u64, "backing off");
                tokio::time::sleep(delay).await;
                delay *= policy.multiplier;
            }
        }
    }

    // Reachable only with an empty attempt budget, which is rejected
    // above as a configuration error.
    Err(ClientError::InvalidRetryPolicy {
        reason: "retry budget elapsed without an attempt".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn policy(initial_delay_ms: u64, max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            initial_delay_ms,
            max_retries,
            multiplier: 2,
            retryable_status_codes: vec![500, 502, 503, 504],
        }
    }

    fn http_failure(status: u16) -> ClientError {
        ClientError::Http {
            status,
            body: None,
            source: None,
        }
    }

    #[tokio::test]
    async fn success_on_first_attempt_makes_no_further_attempts() {
        let attempts = AtomicU32::new(0);
        let result = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, ClientError>(42) }
            },
            &policy(1, 5),
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let attempts = AtomicU32::new(0);
        let result = run_with_retry(
            || {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt < 3 {
                        Err(http_failure(503))
                    } else {
                        Ok("created")
                    }
                }
            },
            &policy(1, 5),
        )
        .await;

        assert_eq!(result.unwrap(), "created");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_exactly_the_attempt_budget() {
        let attempts = AtomicU32::new(0);
        let started = tokio::time::Instant::now();
        let result = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(http_failure(500)) }
            },
            &policy(1_000, 5),
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 5);
        match result.unwrap_err() {
            ClientError::RetriesExhausted { count, last } => {
                assert_eq!(count, 5);
                assert_eq!(last.status(), Some(500));
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
        // Four backoffs at 1s, 2s, 4s, 8s; no residual delay after the
        // final attempt.
        assert_eq!(started.elapsed(), Duration::from_secs(15));
    }

    #[tokio::test(start_paused = true)]
    async fn non_retryable_status_fails_fast_with_zero_delay() {
        let attempts = AtomicU32::new(0);
        let started = tokio::time::Instant::now();
        let result: Result<(), _> = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(http_failure(422)) }
            },
            &policy(1_000, 5),
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(result.unwrap_err().status(), Some(422));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn non_http_failures_are_never_retried() {
        let attempts = AtomicU32::new(0);
        let result: Result<(), _> = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(ClientError::InvalidCustomer { customer_id: 0 }) }
            },
            &policy(1, 5),
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result.unwrap_err(),
            ClientError::InvalidCustomer { .. }
        ));
    }

    #[tokio::test]
    async fn zero_attempt_budget_is_a_configuration_error() {
        let attempts = AtomicU32::new(0);
        let result = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, ClientError>(()) }
            },
            &policy(1, 0),
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 0);
        assert!(matches!(
            result.unwrap_err(),
            ClientError::InvalidRetryPolicy { .. }
        ));
    }

    #[test]
    fn default_policy_matches_the_documented_contract() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.initial_delay_ms, 1_000);
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.multiplier, 2);
        assert_eq!(policy.retryable_status_codes, vec![500, 502, 503, 504]);
    }
}
