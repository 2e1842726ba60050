//! Session context: one active WebDriver session per logical execution
//! context.
//!
//! Parallel test tasks each run inside their own [`scope`]. A scope opened
//! inside another scope inherits the parent's current binding, but
//! rebinding in the child never leaks back into the parent. There is no
//! process-wide session slot; code running outside any scope has no
//! session and fails with [`WebAssertError::NoActiveSession`].

use std::cell::RefCell;
use std::future::Future;

use fantoccini::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::WebAssertError;

/// Handle to one live remote browser session.
///
/// Cheap to clone; all clones drive the same underlying WebDriver session.
#[derive(Clone)]
pub struct Session {
    client: Client,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The underlying WebDriver client, for operations this crate does
    /// not wrap.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn current_url(&self) -> Result<String, WebAssertError> {
        let url = self.client.current_url().await?;
        Ok(url.to_string())
    }

    pub async fn title(&self) -> Result<String, WebAssertError> {
        let value = self.client.execute("return document.title;", vec![]).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Run a script in the page, returning its JSON result. Element
    /// references serialize into valid script arguments.
    pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value, WebAssertError> {
        Ok(self.client.execute(script, args).await?)
    }

    /// Capture the current page as raw PNG bytes. Persisting them is the
    /// caller's concern.
    pub async fn screenshot(&self) -> Result<Vec<u8>, WebAssertError> {
        Ok(self.client.screenshot().await?)
    }

    pub async fn back(&self) -> Result<(), WebAssertError> {
        self.client.back().await?;
        Ok(())
    }

    pub async fn refresh(&self) -> Result<(), WebAssertError> {
        self.client.refresh().await?;
        Ok(())
    }
}

tokio::task_local! {
    static ACTIVE_SESSION: RefCell<Option<Session>>;
}

/// Runs `future` inside its own session context.
///
/// The new context starts with the session currently bound in the
/// enclosing context, if any. [`set_session`] and [`clear_session`] inside
/// the scope only ever affect this context.
pub async fn scope<F: Future>(future: F) -> F::Output {
    let inherited = ACTIVE_SESSION
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten();
    ACTIVE_SESSION.scope(RefCell::new(inherited), future).await
}

/// Binds `session` as the active session of the current context.
pub fn set_session(session: Session) -> Result<(), WebAssertError> {
    ACTIVE_SESSION
        .try_with(|slot| {
            debug!("binding session to current context");
            *slot.borrow_mut() = Some(session);
        })
        .map_err(|_| WebAssertError::NoActiveSession)
}

/// The active session of the current context. Fails with
/// [`WebAssertError::NoActiveSession`] if none has been set since the
/// last clear, or if the caller is outside any [`scope`].
pub fn get_session() -> Result<Session, WebAssertError> {
    ACTIVE_SESSION
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten()
        .ok_or(WebAssertError::NoActiveSession)
}

/// Unbinds the current context's session.
pub fn clear_session() -> Result<(), WebAssertError> {
    ACTIVE_SESSION
        .try_with(|slot| {
            debug!("clearing session from current context");
            *slot.borrow_mut() = None;
        })
        .map_err(|_| WebAssertError::NoActiveSession)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
