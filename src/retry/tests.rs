//! Unit tests for the retry wrapper.
//!
//! Delays in these tests are millisecond-scale so the sleeps are real but
//! cheap; the timing-sensitive assertions count calls, not wall time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::error::NbaError;
use crate::logging::{format_message, Context, Log};
use crate::table::DataTable;

/// Captures log lines for assertions.
#[derive(Default, Clone)]
struct RecordingLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingLog {
    fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Log for RecordingLog {
    fn info(&self, message: &str, context: &Context) {
        self.lines
            .borrow_mut()
            .push(format!("info: {}", format_message(message, context)));
    }

    fn warn(&self, message: &str, context: &Context) {
        self.lines
            .borrow_mut()
            .push(format!("warn: {}", format_message(message, context)));
    }

    fn error(&self, message: &str, context: &Context) {
        self.lines
            .borrow_mut()
            .push(format!("error: {}", format_message(message, context)));
    }
}

/// Fast policy for tests: real backoff arithmetic, tiny real sleeps.
fn fast_policy() -> RetryPolicy {
    RetryPolicy::default()
        .with_initial_delay(Duration::from_millis(1))
        .with_max_delay(Duration::from_millis(8))
}

fn timeout_error() -> NbaError {
    NbaError::Timeout {
        timeout_seconds: 30,
        endpoint: Some("playergamelog".to_string()),
    }
}

fn three_row_table() -> DataTable {
    let mut table = DataTable::new(vec!["GAME_ID".to_string()]);
    for id in ["0022400001", "0022400002", "0022400003"] {
        table.push_row(vec![serde_json::json!(id)]);
    }
    table
}

#[test]
fn test_default_policy_values() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.timeout, Duration::from_secs(30));
    assert_eq!(policy.max_retries, 3);
    assert_eq!(policy.initial_delay, Duration::from_secs(1));
    assert_eq!(policy.backoff_multiplier, 2.0);
    assert_eq!(policy.max_delay, Duration::from_secs(60));
    assert_eq!(policy.on_exhaustion, OnExhaustion::ReturnEmpty);
}

#[test]
fn test_success_on_first_attempt_calls_once() {
    let calls = Cell::new(0u32);
    let retrier = Retrier::new(fast_policy());

    let result: Option<DataTable> = retrier
        .run("op", |_timeout| {
            calls.set(calls.get() + 1);
            Ok(three_row_table())
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(result.unwrap().len(), 3);
}

#[test]
fn test_operation_receives_policy_timeout_every_attempt() {
    let seen = RefCell::new(Vec::new());
    let policy = fast_policy().with_timeout(Duration::from_secs(7));
    let retrier = Retrier::new(policy);

    let _: Option<DataTable> = retrier
        .run("op", |timeout| {
            seen.borrow_mut().push(timeout);
            if seen.borrow().len() < 3 {
                Err(timeout_error())
            } else {
                Ok(DataTable::default())
            }
        })
        .unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![Duration::from_secs(7); 3],
        "same timeout injected on every attempt"
    );
}

#[test]
fn test_transient_failures_then_success() {
    // Fails transiently exactly k=2 times with max_retries=3: the wrapper
    // must call exactly k+1 times and return the success value.
    let calls = Cell::new(0u32);
    let log = RecordingLog::default();
    let retrier = Retrier::with_log(fast_policy(), log.clone());

    let result: Option<DataTable> = retrier
        .run("player_game_log", |_| {
            calls.set(calls.get() + 1);
            if calls.get() <= 2 {
                Err(timeout_error())
            } else {
                Ok(three_row_table())
            }
        })
        .unwrap();

    assert_eq!(calls.get(), 3);
    assert_eq!(result.unwrap().len(), 3);

    let lines = log.lines();
    assert_eq!(lines.len(), 2, "one warning per retry: {lines:?}");
    assert!(lines[0].starts_with("warn: Retry 1/3 for player_game_log"));
    assert!(lines[1].starts_with("warn: Retry 2/3 for player_game_log"));
    assert!(lines[0].contains("delay="));
}

#[test]
fn test_exhaustion_calls_max_retries_plus_one() {
    let calls = Cell::new(0u32);
    let log = RecordingLog::default();
    let retrier = Retrier::with_log(fast_policy().with_max_retries(2), log.clone());

    let result: Option<DataTable> = retrier
        .run("op", |_| {
            calls.set(calls.get() + 1);
            Err(timeout_error())
        })
        .unwrap();

    assert_eq!(calls.get(), 3);
    // Default fallback: an empty table, not an error.
    assert!(result.unwrap().is_empty());

    let lines = log.lines();
    assert!(lines
        .last()
        .unwrap()
        .starts_with("error: Max retries (2) exceeded for op"));
}

#[test]
fn test_zero_retries_means_single_call() {
    let calls = Cell::new(0u32);
    let retrier = Retrier::new(fast_policy().with_max_retries(0));

    let result: Option<DataTable> = retrier
        .run("op", |_| {
            calls.set(calls.get() + 1);
            Err(timeout_error())
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_raise_policy_returns_last_error() {
    let retrier = Retrier::new(
        fast_policy()
            .with_max_retries(1)
            .with_on_exhaustion(OnExhaustion::Raise),
    );

    let result: crate::Result<Option<DataTable>> = retrier.run("op", |_| Err(timeout_error()));

    match result {
        Err(NbaError::Timeout { .. }) => {}
        other => panic!("expected the last Timeout error, got {other:?}"),
    }
}

#[test]
fn test_return_none_policy_yields_absent_result() {
    let retrier = Retrier::new(
        fast_policy()
            .with_max_retries(0)
            .with_on_exhaustion(OnExhaustion::ReturnNone),
    );

    let result: Option<DataTable> = retrier.run("op", |_| Err(timeout_error())).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_validation_errors_are_never_retried() {
    let calls = Cell::new(0u32);
    // Even with the empty-table fallback configured, validation errors
    // must propagate.
    let retrier = Retrier::new(fast_policy().with_max_retries(5));

    let result: crate::Result<Option<DataTable>> = retrier.run("op", |_| {
        calls.set(calls.get() + 1);
        Err(NbaError::validation("season", "2022-25", "consecutive years"))
    });

    assert_eq!(calls.get(), 1);
    match result {
        Err(NbaError::Validation { .. }) => {}
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_not_found_errors_are_never_retried() {
    let calls = Cell::new(0u32);
    let retrier = Retrier::new(fast_policy().with_max_retries(5));

    let result: crate::Result<Option<DataTable>> = retrier.run("op", |_| {
        calls.set(calls.get() + 1);
        Err(NbaError::PlayerNotFound {
            player_id: "99999999".to_string(),
        })
    });

    assert_eq!(calls.get(), 1);
    match result {
        Err(NbaError::PlayerNotFound { .. }) => {}
        other => panic!("expected PlayerNotFoundError, got {other:?}"),
    }
}

#[test]
fn test_permanent_api_errors_stop_immediately_with_fallback() {
    let calls = Cell::new(0u32);
    let log = RecordingLog::default();
    let retrier = Retrier::with_log(fast_policy().with_max_retries(5), log.clone());

    let result: Option<DataTable> = retrier
        .run("op", |_| {
            calls.set(calls.get() + 1);
            Err(NbaError::Api {
                status: Some(404),
                endpoint: Some("playergamelog".to_string()),
                message: "HTTP error".to_string(),
            })
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert!(result.unwrap().is_empty());
    assert!(log.lines()[0].starts_with("error: Non-retryable error in op"));
}

#[test]
fn test_unexpected_errors_are_never_retried() {
    let calls = Cell::new(0u32);
    let retrier = Retrier::new(
        fast_policy()
            .with_max_retries(5)
            .with_on_exhaustion(OnExhaustion::Raise),
    );

    let result: crate::Result<Option<DataTable>> = retrier.run("op", |_| {
        calls.set(calls.get() + 1);
        Err(NbaError::Unexpected {
            message: "connection refused".to_string(),
        })
    });

    assert_eq!(calls.get(), 1);
    assert!(result.is_err());
}

#[test]
fn test_rate_limited_is_retried() {
    let calls = Cell::new(0u32);
    let retrier = Retrier::new(fast_policy().with_max_retries(2));

    let result: Option<DataTable> = retrier
        .run("op", |_| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(NbaError::RateLimited {
                    retry_after: None,
                    endpoint: None,
                })
            } else {
                Ok(three_row_table())
            }
        })
        .unwrap();

    assert_eq!(calls.get(), 2);
    assert_eq!(result.unwrap().len(), 3);
}

#[test]
fn test_backoff_delays_follow_formula() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.delay_for_attempt(0), Duration::from_secs(1));
    assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(2));
    assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(4));
    assert_eq!(policy.delay_for_attempt(3), Duration::from_secs(8));
    // Capped at max_delay.
    assert_eq!(policy.delay_for_attempt(6), Duration::from_secs(60));
    assert_eq!(policy.delay_for_attempt(100), Duration::from_secs(60));
}

#[test]
fn test_backoff_is_monotonically_non_decreasing() {
    let policy = RetryPolicy::default()
        .with_initial_delay(Duration::from_millis(250))
        .with_backoff_multiplier(1.5)
        .with_max_delay(Duration::from_secs(10));

    let mut previous = Duration::ZERO;
    for attempt in 0..20 {
        let delay = policy.delay_for_attempt(attempt);
        assert!(delay >= previous, "attempt {attempt}: {delay:?} < {previous:?}");
        assert!(delay > Duration::ZERO);
        assert!(delay <= policy.max_delay);
        previous = delay;
    }
}

#[test]
fn test_retry_after_hint_is_a_floor_on_the_delay() {
    let policy = RetryPolicy::default();
    // Hint above the computed delay wins.
    assert_eq!(policy.backoff_delay(0, Some(10)), Duration::from_secs(10));
    // Computed delay above the hint wins.
    assert_eq!(policy.backoff_delay(5, Some(2)), Duration::from_secs(32));
    // No hint: plain formula.
    assert_eq!(policy.backoff_delay(1, None), Duration::from_secs(2));
}

#[test]
fn test_with_retry_convenience() {
    let result: Option<DataTable> =
        with_retry(fast_policy(), "op", |_| Ok(three_row_table())).unwrap();
    assert_eq!(result.unwrap().len(), 3);
}
