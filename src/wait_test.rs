// Unit tests for the polling engine. Probes here are plain futures; the
// session-bound and element-bound variants are covered by the integration
// tests against the mock WebDriver server.

use std::cell::Cell;
use std::time::{Duration, Instant};

use super::*;
use crate::errors::WebAssertError;

#[tokio::test]
async fn test_satisfied_probe_returns_immediately_without_sleeping() {
    let started = Instant::now();
    let result = Wait::new()
        .interval(Duration::from_millis(500))
        .poll(|| async { Ok(Some(42)) })
        .await;
    assert_eq!(result.unwrap(), 42);
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn test_unsatisfied_probe_times_out_between_t_and_t_plus_interval() {
    let timeout = Duration::from_millis(200);
    let interval = Duration::from_millis(50);
    let started = Instant::now();
    let result = Wait::new()
        .timeout(timeout)
        .interval(interval)
        .poll(|| async { Ok::<Option<()>, WebAssertError>(None) })
        .await;
    let elapsed = started.elapsed();

    match result {
        Err(WebAssertError::Timeout { timeout: t, .. }) => assert_eq!(t, timeout),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert!(elapsed >= timeout, "timed out too early: {elapsed:?}");
    // generous upper bound to stay robust on loaded machines
    assert!(elapsed < Duration::from_millis(600), "timed out too late: {elapsed:?}");
}

#[tokio::test]
async fn test_zero_timeout_evaluates_exactly_once_with_no_sleep() {
    let calls = Cell::new(0);
    let started = Instant::now();
    let result = Wait::new()
        .timeout(Duration::ZERO)
        .interval(Duration::from_millis(500))
        .poll(|| {
            calls.set(calls.get() + 1);
            async { Ok::<Option<()>, WebAssertError>(None) }
        })
        .await;
    assert!(matches!(result, Err(WebAssertError::Timeout { .. })));
    assert_eq!(calls.get(), 1);
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn test_transient_errors_are_suppressed_until_the_probe_succeeds() {
    let calls = Cell::new(0);
    let result = Wait::new()
        .timeout(Duration::from_secs(5))
        .interval(Duration::from_millis(10))
        .poll(|| {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt < 3 {
                    Err(WebAssertError::ElementNotFound("not yet".to_string()))
                } else {
                    Ok(Some(attempt))
                }
            }
        })
        .await;
    assert_eq!(result.unwrap(), 3);
    assert_eq!(calls.get(), 3);
}

#[tokio::test]
async fn test_non_transient_errors_abort_the_wait_immediately() {
    let calls = Cell::new(0);
    let result = Wait::new()
        .timeout(Duration::from_secs(5))
        .interval(Duration::from_millis(10))
        .poll(|| {
            calls.set(calls.get() + 1);
            async { Err::<Option<()>, _>(WebAssertError::NotANumber("x".to_string())) }
        })
        .await;
    assert!(matches!(result, Err(WebAssertError::NotANumber(_))));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_suppression_is_configurable() {
    // Treat every error as transient; the poll then runs to its deadline.
    let result = Wait::new()
        .timeout(Duration::from_millis(50))
        .interval(Duration::from_millis(10))
        .suppress(|_| true)
        .poll(|| async { Err::<Option<()>, _>(WebAssertError::NotANumber("x".to_string())) })
        .await;
    assert!(matches!(result, Err(WebAssertError::Timeout { .. })));
}

#[tokio::test]
async fn test_until_without_a_session_fails_fast() {
    let calls = Cell::new(0);
    let result = Wait::new()
        .timeout(Duration::from_secs(5))
        .until(|_session| {
            calls.set(calls.get() + 1);
            async { Ok(Some(())) }
        })
        .await;
    assert!(matches!(result, Err(WebAssertError::NoActiveSession)));
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn test_pause_zero_returns_immediately() {
    let started = Instant::now();
    pause(Duration::ZERO).await;
    assert!(started.elapsed() < Duration::from_millis(50));
}
