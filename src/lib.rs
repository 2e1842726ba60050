//! # webassert
//!
//! Fluent assertions and queries for WebDriver-driven browser tests.
//!
//! Test code obtains element handles however it likes (fantoccini
//! locators, page objects, ...) and hands them to this crate's free
//! functions: boolean queries for branching, `assert_*` counterparts that
//! fail with a rich diagnostic message, and wait primitives that poll the
//! remote session until a condition holds or a deadline passes.
//!
//! ## Session handling
//!
//! One remote session is active per logical execution context. Bind it
//! once at the start of a test; every query that needs to reach the
//! browser picks it up from the context:
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use fantoccini::{ClientBuilder, Locator};
//! use webassert::{Session, asserts, queries, session, wait};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = ClientBuilder::rustls()
//!     .connect("http://localhost:4444")
//!     .await?;
//!
//! session::scope(async {
//!     session::set_session(Session::new(client))?;
//!
//!     let heading = session::get_session()?
//!         .client()
//!         .find(Locator::Css("h1"))
//!         .await?;
//!
//!     wait::wait_for_displayed(&heading, Duration::from_secs(10)).await?;
//!     asserts::assert_text_equals("Welcome", &heading).await?;
//!     assert!(queries::id_equals("main-heading", &heading).await?);
//!
//!     session::clear_session()?;
//!     Ok::<_, anyhow::Error>(())
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Parallel tests each open their own [`session::scope`]; a scope opened
//! inside another inherits the parent's session but rebinding inside it
//! never leaks out.
//!
//! ## Failure diagnostics
//!
//! A failing assertion renders the offending element into its message:
//!
//! ```text
//! Id is not equal to "xyz"
//!     Element: <h1 id="abc" class="title">Welcome</h1>
//! ```
//!
//! so the failure is diagnosable without re-running the test.

/// State-mutating element operations (click, type, select, check)
pub mod actions;

/// Throwing assertion counterparts of the queries
pub mod asserts;

/// Null-tolerant string and numeric comparison primitives
pub mod compare;

/// Error taxonomy for session, query and assertion failures
pub mod errors;

/// Element rendering for failure diagnostics
pub mod html;

/// Element and page state accessors and boolean predicates
pub mod queries;

/// Per-context session storage
pub mod session;

/// String helpers for messages and rendering
mod strings;

/// Condition poller and wait primitives
pub mod wait;

pub use errors::WebAssertError;
pub use session::{Session, clear_session, get_session, scope, set_session};
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, Wait, is_displayed_within, wait_for_displayed};
