//! Expectation matching and lifecycle engine.
//!
//! A [`Mock`] owns, per operation name, an ordered list of live
//! [`Expectation`]s and an append-only call history. Incoming calls are
//! matched first-registered-first-tried, consume the winner's repeat
//! budget, and return its configured response; exhausted expectations are
//! removed so later calls fall through to the next rule in line.
//!
//! # Example
//!
//! ```rust
//! use standin::{args, Matcher, Mock};
//!
//! let store = Mock::new("UserStore");
//!
//! // Catch-all for large ids, never exhausted.
//! store
//!     .register("exists")
//!     .with_matchers(vec![Matcher::new(|args| args[0].as_i64().unwrap_or(0) > 10)])
//!     .will_return(args![false])
//!     .persist();
//!
//! // Specific case, consumed on first match.
//! store
//!     .register("exists")
//!     .with_args(args![1])
//!     .will_return(args![true]);
//!
//! assert_eq!(store.call("exists", args![1]), args![true]);
//! assert_eq!(store.call("exists", args![11]), args![false]);
//! assert!(store.is_satisfied());
//! ```

mod builder;
mod expectation;
mod mock;
mod report;

pub use builder::ExpectationHandle;
pub use expectation::{ArgSpec, Expectation, Matcher, Repeat};
pub use mock::{CallRecord, Mock};
pub use report::{SatisfactionReport, UnsatisfiedExpectation};
