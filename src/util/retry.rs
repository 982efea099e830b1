//! Run-level retry budget.

use std::future::Future;
use std::time::Duration;

use crate::error::AgentError;

/// How many times a failed agent run is re-attempted.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Pause between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_retries(0)
    }
}

impl RetryPolicy {
    /// Policy allowing `retries` re-attempts after the first failure.
    pub fn from_retries(retries: u32) -> Self {
        Self {
            max_attempts: retries.saturating_add(1),
            backoff: Duration::ZERO,
        }
    }

    /// Execute an async operation, re-attempting errors that
    /// [`AgentError::retries_run`] accepts.
    ///
    /// The closure receives the zero-based attempt number.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, AgentError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, AgentError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if !e.retries_run() || attempt + 1 >= max_attempts {
                        return Err(e);
                    }

                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts,
                        error = %e,
                        "Retrying agent run after error"
                    );

                    if !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}
