use std::time::Duration;

use fantoccini::error::CmdError;
use thiserror::Error;

/// Error type for all session, query and assertion operations
#[derive(Debug, Error)]
pub enum WebAssertError {
    /// No session bound to the current execution context
    #[error(
        "no active session: bind one with `session::set_session(..)` inside `session::scope(..)` before querying the browser"
    )]
    NoActiveSession,
    /// Element is missing or stale on the remote side
    #[error("element not found: {0}")]
    ElementNotFound(String),
    /// A wait deadline elapsed without the condition being met
    #[error("condition not met within {timeout:?}{detail}")]
    Timeout { timeout: Duration, detail: String },
    /// A value comparison assertion failed
    #[error("{0}")]
    ComparisonFailed(String),
    /// An element or page state assertion failed
    #[error("{0}")]
    AssertionFailed(String),
    /// A textual value could not be parsed as a number
    #[error("value {0:?} is not a number")]
    NotANumber(String),
    /// An option lookup by text, value or index found nothing
    #[error("no such option: {0}")]
    NoSuchOption(String),
    /// Any other WebDriver command failure
    #[error("webdriver command failed: {0}")]
    Client(CmdError),
    /// Element reference could not be serialized into script arguments
    #[error("failed to serialize element reference: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WebAssertError {
    /// True for the error class that is safe to retry while polling:
    /// the element is momentarily absent or its reference went stale.
    pub fn is_element_missing(&self) -> bool {
        matches!(self, WebAssertError::ElementNotFound(_))
    }

    /// True for the two error kinds that represent a failed test
    /// expectation rather than an infrastructure or usage problem.
    pub fn is_test_failure(&self) -> bool {
        matches!(
            self,
            WebAssertError::ComparisonFailed(_) | WebAssertError::AssertionFailed(_)
        )
    }
}

impl From<CmdError> for WebAssertError {
    fn from(err: CmdError) -> Self {
        // Classify the raw WebDriver failure into our taxonomy. Stale
        // references only surface through the error message, so detect
        // them the same way the drivers report them.
        if err.is_miss() {
            return WebAssertError::ElementNotFound(err.to_string());
        }
        let msg = err.to_string();
        if msg.contains("stale element") {
            WebAssertError::ElementNotFound(msg)
        } else {
            WebAssertError::Client(err)
        }
    }
}
