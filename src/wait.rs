//! Condition poller: re-evaluate a probe against the remote session until
//! it is satisfied or a deadline elapses.

use std::future::Future;
use std::time::{Duration, Instant};

use fantoccini::elements::Element;
use tracing::{debug, trace};

use crate::errors::WebAssertError;
use crate::html;
use crate::session::{self, Session};
use crate::strings;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Poll configuration: deadline, interval between evaluations, and the
/// error class that is swallowed while polling.
///
/// By default only element-missing failures (absent or stale references)
/// are treated as "not satisfied yet"; every other error aborts the wait
/// immediately. Termination is solely deadline-driven; a zero timeout
/// means a single evaluation with no retry and no sleep.
#[derive(Clone, Copy)]
pub struct Wait {
    timeout: Duration,
    interval: Duration,
    suppress: fn(&WebAssertError) -> bool,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_POLL_INTERVAL,
            suppress: WebAssertError::is_element_missing,
        }
    }
}

impl Wait {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Overrides which errors are swallowed between evaluations.
    pub fn suppress(mut self, suppress: fn(&WebAssertError) -> bool) -> Self {
        self.suppress = suppress;
        self
    }

    /// Polls `probe` until it yields `Ok(Some(value))`.
    ///
    /// `Ok(None)` means "not satisfied yet". A satisfied probe returns
    /// immediately, without a trailing sleep. Suppressed errors keep the
    /// poll going; any other error propagates at once. When the deadline
    /// passes after an unsatisfied evaluation the wait fails with
    /// [`WebAssertError::Timeout`].
    pub async fn poll<T, F, Fut>(&self, mut probe: F) -> Result<T, WebAssertError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, WebAssertError>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            match probe().await {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => trace!("condition not met yet"),
                Err(err) if (self.suppress)(&err) => {
                    debug!("suppressed while polling: {err}");
                }
                Err(err) => return Err(err),
            }
            if Instant::now() >= deadline {
                return Err(WebAssertError::Timeout {
                    timeout: self.timeout,
                    detail: String::new(),
                });
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Like [`Wait::poll`], but hands the probe the session bound to the
    /// current context. The session is looked up fresh on every
    /// evaluation; a missing session aborts the wait immediately.
    pub async fn until<T, F, Fut>(&self, mut probe: F) -> Result<T, WebAssertError>
    where
        F: FnMut(Session) -> Fut,
        Fut: Future<Output = Result<Option<T>, WebAssertError>>,
    {
        self.poll(move || {
            let attempt = session::get_session().map(&mut probe);
            async move {
                match attempt {
                    Ok(probing) => probing.await,
                    Err(err) => Err(err),
                }
            }
        })
        .await
    }
}

/// Blocks until the element is displayed, or fails with a timeout that
/// carries the rendered element.
pub async fn wait_for_displayed(
    element: &Element,
    timeout: Duration,
) -> Result<(), WebAssertError> {
    let result = Wait::new()
        .timeout(timeout)
        .poll(|| async move {
            match element.is_displayed().await {
                Ok(true) => Ok(Some(())),
                Ok(false) => Ok(None),
                Err(err) => Err(err.into()),
            }
        })
        .await;
    match result {
        Err(WebAssertError::Timeout { timeout, .. }) => Err(WebAssertError::Timeout {
            timeout,
            detail: strings::indent(&format!(
                "\nElement: {}",
                html::html_of(Some(element)).await
            )),
        }),
        other => other,
    }
}

/// State probe variant of [`wait_for_displayed`]: a timeout or a missing
/// element becomes `Ok(false)` instead of an error. Infrastructure
/// failures (no session, lost connection) still propagate.
pub async fn is_displayed_within(
    element: &Element,
    timeout: Duration,
) -> Result<bool, WebAssertError> {
    match wait_for_displayed(element, timeout).await {
        Ok(()) => Ok(true),
        Err(WebAssertError::Timeout { .. } | WebAssertError::ElementNotFound(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Unconditional pause. A zero or negative-equivalent duration returns
/// immediately.
pub async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
#[path = "wait_test.rs"]
mod wait_test;
