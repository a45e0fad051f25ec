//! Uniform retry policy for backend calls
//!
//! Every control-plane call goes through [`retry`] or [`retry_with`]:
//! transient failures are retried with exponential backoff, permanent
//! failures come back on the first attempt.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Retry configuration for backend operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,

    /// Initial delay between retries (milliseconds)
    pub initial_delay_ms: u64,

    /// Maximum delay between retries (milliseconds)
    pub max_delay_ms: u64,

    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 1000,
            max_delay_ms: 30_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Delay before the retry that follows `attempt` (0-based), capped at `max_delay_ms`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis((delay as u64).min(self.max_delay_ms))
    }
}

/// Whether a failed call may succeed if repeated unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Network errors, timeouts, throttling, backend-side hiccups
    Transient,
    /// Rejected requests: bad parameters, authorization failures
    Permanent,
}

/// Backend error types that know their own retry class
pub trait Classify {
    fn classify(&self) -> ErrorClass;
}

/// Outcome of a call that did not succeed under the retry policy
#[derive(Debug)]
pub enum RetryError<E> {
    /// Classified permanent; returned without retrying
    Permanent(E),
    /// Still transient after the last allowed attempt
    Exhausted { attempts: u32, last: E },
}

impl<E> RetryError<E> {
    pub fn into_inner(self) -> E {
        match self {
            RetryError::Permanent(e) => e,
            RetryError::Exhausted { last, .. } => last,
        }
    }
}

/// Run `op` under `config`, classifying failures with [`Classify`]
pub async fn retry<T, E, F, Fut>(
    config: &RetryConfig,
    operation: &str,
    op: F,
) -> std::result::Result<T, RetryError<E>>
where
    E: Classify + Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    retry_with(config, operation, |e: &E| e.classify(), op).await
}

/// Run `op` under `config` with an explicit classifier
pub async fn retry_with<T, E, C, F, Fut>(
    config: &RetryConfig,
    operation: &str,
    classify: C,
    mut op: F,
) -> std::result::Result<T, RetryError<E>>
where
    E: Display,
    C: Fn(&E) -> ErrorClass,
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        match classify(&err) {
            ErrorClass::Permanent => {
                tracing::debug!(operation, attempt, error = %err, "Permanent failure, not retrying");
                return Err(RetryError::Permanent(err));
            }
            ErrorClass::Transient if attempt >= max_attempts => {
                tracing::warn!(operation, attempt, error = %err, "Retry budget exhausted");
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    last: err,
                });
            }
            ErrorClass::Transient => {
                let delay = config.delay_for_attempt(attempt - 1);
                tracing::warn!(
                    operation,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
