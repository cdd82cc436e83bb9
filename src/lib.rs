//! # standin
//!
//! A call-expectation engine for building in-process test doubles.
//!
//! Test setup code registers expected invocations of a named operation with
//! optional argument rules, response values, and repeat counts; at runtime,
//! invocations are matched against the registered expectations in
//! registration order, consumed according to their repeat budget, and the
//! configured response is returned. At the end of a test, the engine
//! reports whether all non-persistent expectations were satisfied.
//!
//! ## Quick Start
//!
//! ```rust
//! use standin::{args, Mock};
//!
//! let store = Mock::new("UserStore");
//!
//! store
//!     .register("get")
//!     .with_args(args![1])
//!     .will_return(args!["alice"]);
//!
//! assert_eq!(store.call("get", args![1]), args!["alice"]);
//! assert!(store.is_satisfied());
//! ```
//!
//! ## Typed wrappers
//!
//! The engine works on untyped value sequences; a thin adapter gives a
//! mock its typed surface:
//!
//! ```rust
//! use standin::{args, Mock};
//!
//! struct UserStoreMock {
//!     mock: Mock,
//! }
//!
//! impl UserStoreMock {
//!     fn get(&self, id: i64) -> String {
//!         let reply = self.mock.call("get", args![id]);
//!         reply[0].as_str().unwrap_or_default().to_string()
//!     }
//! }
//!
//! let store = UserStoreMock { mock: Mock::new("UserStore") };
//! store.mock.register("get").with_args(args![7]).will_return(args!["bob"]);
//! assert_eq!(store.get(7), "bob");
//! ```
//!
//! ## Matchers, repeats, persistence
//!
//! ```rust
//! use standin::{args, Matcher, Mock};
//!
//! let api = Mock::new("Api");
//!
//! // Accept any call where the first argument is over 10, forever.
//! api.register("check")
//!     .with_matchers(vec![Matcher::new(|args| args[0].as_i64().unwrap_or(0) > 10)])
//!     .will_return(args![false])
//!     .persist();
//!
//! // A specific case, good for exactly two calls.
//! api.register("check")
//!     .with_args(args![1])
//!     .will_return(args![true])
//!     .repeat_times(2);
//!
//! assert_eq!(api.call("check", args![1]), args![true]);
//! assert_eq!(api.call("check", args![1]), args![true]);
//! assert_eq!(api.call("check", args![99]), args![false]);
//! assert!(api.is_satisfied());
//! ```
//!
//! Unmatched calls fail the current test through the mock's host context
//! (by default, a panic); use [`Mock::try_call`] when the harness wants a
//! `Result` instead.

pub mod context;
pub mod engine;
pub mod error;
pub mod value;

// Core types
pub use engine::{
    ArgSpec, CallRecord, Expectation, ExpectationHandle, Matcher, Mock, Repeat,
    SatisfactionReport, UnsatisfiedExpectation,
};

// Host context seam
pub use context::{PanicContext, TestContext};

// Errors
pub use error::MockError;

// Dynamic values
pub use value::Value;

#[doc(hidden)]
pub use serde_json::json as __json;
