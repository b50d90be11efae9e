//! Retry/timeout wrapper around fetch operations.
//!
//! [`Retrier::run`] executes an operation under an immutable
//! [`RetryPolicy`]: the per-attempt timeout is handed to the operation on
//! every call, transient failures are retried with capped exponential
//! backoff (honoring a rate-limit `Retry-After` hint as a floor), and
//! terminal failures resolve through the configured [`OnExhaustion`]
//! behavior. Validation and entity-not-found errors always propagate;
//! they are caller errors, not service conditions.
//!
//! The wrapper holds no state beyond a per-invocation attempt counter, so
//! one `Retrier` can back any number of independent calls.

use std::thread;
use std::time::Duration;

use crate::error::{NbaError, Result};
use crate::logging::{Log, StderrLog};

#[cfg(test)]
mod tests;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

/// What to do when an operation fails terminally or runs out of retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnExhaustion {
    /// Resolve to an empty result (`T::default()`, a zero-row table).
    /// The default, so batch usage degrades to "no data" instead of
    /// crashing on one flaky call.
    #[default]
    ReturnEmpty,
    /// Re-raise the last classified error.
    Raise,
    /// Resolve to an absent result (`None`).
    ReturnNone,
}

/// Immutable retry configuration, constructed once per wrapped operation.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Per-attempt timeout passed to the operation.
    pub timeout: Duration,
    /// Number of retries after the first attempt; 0 disables retries.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: f64,
    pub max_delay: Duration,
    pub on_exhaustion: OnExhaustion,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: DEFAULT_INITIAL_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            max_delay: DEFAULT_MAX_DELAY,
            on_exhaustion: OnExhaustion::ReturnEmpty,
        }
    }
}

impl RetryPolicy {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    pub fn with_backoff_multiplier(mut self, backoff_multiplier: f64) -> Self {
        self.backoff_multiplier = backoff_multiplier;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_on_exhaustion(mut self, on_exhaustion: OnExhaustion) -> Self {
        self.on_exhaustion = on_exhaustion;
        self
    }

    /// Backoff delay for a 0-indexed attempt:
    /// `min(initial_delay * backoff_multiplier^attempt, max_delay)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let scale = self.backoff_multiplier.powi(attempt as i32);
        let seconds = self.initial_delay.as_secs_f64() * scale;
        let capped = seconds.min(self.max_delay.as_secs_f64());
        // A wild multiplier can produce NaN; min() above already resolves
        // infinities to the cap.
        if capped.is_finite() && capped > 0.0 {
            Duration::from_secs_f64(capped)
        } else {
            self.max_delay
        }
    }

    /// Delay with an optional server-supplied retry-after floor.
    pub fn backoff_delay(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let delay = self.delay_for_attempt(attempt);
        match retry_after {
            Some(seconds) => delay.max(Duration::from_secs(seconds)),
            None => delay,
        }
    }
}

/// Wraps operations with the retry/timeout/fallback behavior of a
/// [`RetryPolicy`], logging through the supplied capability.
pub struct Retrier<L: Log = StderrLog> {
    policy: RetryPolicy,
    log: L,
}

impl Retrier<StderrLog> {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            log: StderrLog,
        }
    }
}

impl<L: Log> Retrier<L> {
    pub fn with_log(policy: RetryPolicy, log: L) -> Self {
        Self { policy, log }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run `op` under this retrier's policy.
    ///
    /// The operation receives the per-attempt timeout and is called at
    /// most `max_retries + 1` times. Returns `Ok(Some(value))` on
    /// success; failures resolve per the policy (see module docs).
    pub fn run<T, F>(&self, op_name: &str, mut op: F) -> Result<Option<T>>
    where
        T: Default,
        F: FnMut(Duration) -> Result<T>,
    {
        let max_retries = self.policy.max_retries;
        let mut attempt: u32 = 0;

        loop {
            let err = match op(self.policy.timeout) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => err,
            };

            let kind = err.kind();

            if kind.is_fatal() {
                // Caller error; fallback policy does not apply.
                return Err(err);
            }

            if !kind.is_transient() {
                self.log.error(
                    &format!("Non-retryable error in {op_name}"),
                    &[("error", err.to_string())],
                );
                return self.resolve(err);
            }

            if attempt >= max_retries {
                self.log.error(
                    &format!("Max retries ({max_retries}) exceeded for {op_name}"),
                    &[("error", err.to_string())],
                );
                return self.resolve(err);
            }

            let delay = self.policy.backoff_delay(attempt, err.retry_after());
            self.log.warn(
                &format!("Retry {}/{} for {op_name}", attempt + 1, max_retries),
                &[
                    ("error", err.to_string()),
                    ("delay", format!("{:.2}s", delay.as_secs_f64())),
                ],
            );
            thread::sleep(delay);
            attempt += 1;
        }
    }

    /// Apply the exhaustion behavior to a terminal (non-fatal) error.
    fn resolve<T: Default>(&self, err: NbaError) -> Result<Option<T>> {
        match self.policy.on_exhaustion {
            OnExhaustion::ReturnEmpty => Ok(Some(T::default())),
            OnExhaustion::Raise => Err(err),
            OnExhaustion::ReturnNone => Ok(None),
        }
    }
}

/// One-shot convenience for callers that don't keep a [`Retrier`] around.
pub fn with_retry<T, F>(policy: RetryPolicy, op_name: &str, op: F) -> Result<Option<T>>
where
    T: Default,
    F: FnMut(Duration) -> Result<T>,
{
    Retrier::new(policy).run(op_name, op)
}
