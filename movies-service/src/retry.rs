use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::FetchError;

/// Fixed-delay retry for downstream calls.
///
/// Retries only failures classified as `FetchError::Server`; everything else
/// propagates on first occurrence. When the budget is exhausted the original
/// server failure is returned unchanged, so the caller always sees the true
/// downstream message rather than a generic retries-exhausted wrapper.
///
/// The policy holds no per-call state and can be shared across concurrent
/// invocations; each `run` gets its own attempt counter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_retries` is the number of additional attempts after the first,
    /// `delay` the fixed pause between consecutive attempts.
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 0u32;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        attempt,
                        max_retries = self.max_retries,
                        error = %err,
                        "downstream call failed, retrying after fixed delay"
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn returns_first_success_without_retrying() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let calls = AtomicUsize::new(0);

        let result = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, FetchError>(42) }
            })
            .await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_server_failures_until_budget_exhausted() {
        let policy = RetryPolicy::new(3, Duration::from_secs(1));
        let calls = AtomicUsize::new(0);
        let started = tokio::time::Instant::now();

        let result: Result<(), _> = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FetchError::Server("boom".to_string())) }
            })
            .await;

        // 1 initial attempt + 3 retries, original failure re-raised unchanged.
        assert_eq!(result, Err(FetchError::Server("boom".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        // Fixed spacing: three sleeps of exactly one second on the paused clock.
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn does_not_retry_client_failures() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FetchError::Client("bad input".to_string())) }
            })
            .await;

        assert_eq!(result, Err(FetchError::Client("bad input".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FetchError::NotFound) }
            })
            .await;

        assert_eq!(result, Err(FetchError::NotFound));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_once_the_downstream_recovers() {
        let policy = RetryPolicy::new(3, Duration::from_secs(1));
        let calls = AtomicUsize::new(0);

        let result = policy
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(FetchError::Server("flaky".to_string()))
                    } else {
                        Ok("recovered")
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("recovered"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
