// Unit tests for the session context. Tests that need a live session to
// bind go through the mock WebDriver server in tests/.

use super::*;
use crate::errors::WebAssertError;

#[tokio::test]
async fn test_get_session_outside_any_scope_is_a_configuration_error() {
    let err = get_session().unwrap_err();
    assert!(matches!(err, WebAssertError::NoActiveSession));
}

#[tokio::test]
async fn test_get_session_inside_scope_before_set_fails() {
    let result = scope(async { get_session() }).await;
    assert!(matches!(result, Err(WebAssertError::NoActiveSession)));
}

#[tokio::test]
async fn test_clear_session_outside_any_scope_fails() {
    assert!(matches!(
        clear_session(),
        Err(WebAssertError::NoActiveSession)
    ));
}

#[tokio::test]
async fn test_clear_session_inside_scope_is_fine_even_when_nothing_is_bound() {
    let result = scope(async { clear_session() }).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_nested_scope_without_parent_binding_starts_empty() {
    let result = scope(async { scope(async { get_session() }).await }).await;
    assert!(matches!(result, Err(WebAssertError::NoActiveSession)));
}
