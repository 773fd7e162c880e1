//! Bounded exponential backoff for transient API failures.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How often and how patiently a failed call is repeated.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of calls, the first one included. Zero behaves like one.
    pub attempts: u32,
    /// Wait before the second call; doubled for every further call
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, base_delay: Duration) -> Self {
        Self {
            attempts,
            base_delay,
            max_delay: Duration::from_secs(5),
        }
    }

    /// Chat completion calls: 3 attempts, waiting 1s then 2s.
    pub fn chat_completion() -> Self {
        Self::new(3, Duration::from_secs(1))
    }

    /// Wait before call number `attempt` (1-based, so the first retry is 2).
    fn delay_before(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(2).min(16);
        self.base_delay
            .saturating_mul(1 << doublings)
            .min(self.max_delay)
    }

    /// Run `operation` until it succeeds, fails with an error `is_transient`
    /// rejects, or the attempts are used up. The last error is returned.
    pub async fn run<T, E, F, Fut>(
        &self,
        label: &str,
        mut operation: F,
        is_transient: impl Fn(&E) -> bool,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!("{}: succeeded on attempt {}/{}", label, attempt, attempts);
                    }
                    return Ok(value);
                }
                Err(e) if attempt < attempts && is_transient(&e) => {
                    let delay = self.delay_before(attempt + 1);
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {:?}",
                        label, attempt, attempts, e, delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    debug!("{}: giving up after attempt {}/{}: {}", label, attempt, attempts, e);
                    return Err(e);
                }
            }
        }
    }
}
