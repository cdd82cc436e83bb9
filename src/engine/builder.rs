//! Chainable configuration handle for a registered expectation.

use super::expectation::{ArgSpec, Matcher, Repeat};
use super::mock::Mock;
use crate::value::Value;

/// Handle returned by [`Mock::register`], used to configure the freshly
/// registered expectation.
///
/// Every method takes the registry lock for the duration of the single
/// field update, so configuration is safe even while other threads are
/// exercising the mock. Configuration is expected to happen before the
/// exercising phase; configuring an expectation that was already consumed
/// (or swept away by `reset`) fails through the host context.
///
/// # Example
///
/// ```rust
/// use standin::{args, Mock};
///
/// let store = Mock::new("UserStore");
/// store
///     .register("get")
///     .with_args(args![1])
///     .will_return(args!["alice"])
///     .repeat_times(2);
/// ```
pub struct ExpectationHandle<'a> {
    mock: &'a Mock,
    operation: String,
    id: u64,
}

impl<'a> ExpectationHandle<'a> {
    pub(crate) fn new(mock: &'a Mock, operation: &str, id: u64) -> Self {
        Self {
            mock,
            operation: operation.to_string(),
            id,
        }
    }

    /// Match only calls whose full argument list deep-equals `arguments`.
    ///
    /// Replaces any matchers configured earlier on this expectation.
    pub fn with_args(self, arguments: Vec<Value>) -> Self {
        self.mock.configure(&self.operation, self.id, |e| {
            e.args = ArgSpec::Exact(arguments);
        });
        self
    }

    /// Match only calls accepted by every given predicate.
    ///
    /// An empty matcher list accepts every call for the operation.
    /// Replaces any exact arguments configured earlier on this expectation.
    pub fn with_matchers(self, matchers: Vec<Matcher>) -> Self {
        self.mock.configure(&self.operation, self.id, |e| {
            e.args = ArgSpec::Matchers(matchers);
        });
        self
    }

    /// Set the response sequence returned on a match.
    pub fn will_return(self, response: Vec<Value>) -> Self {
        self.mock.configure(&self.operation, self.id, |e| {
            e.response = response;
        });
        self
    }

    /// Allow the expectation to match `times` invocations before it is
    /// removed from the registry.
    ///
    /// # Panics
    ///
    /// Panics if `times` is zero. A zero budget is neither persistent nor
    /// consumable; use [`persist`](Self::persist) for unlimited matches.
    pub fn repeat_times(self, times: u32) -> Self {
        if times == 0 {
            panic!("repeat count must be at least 1; use persist() for unlimited matches");
        }
        self.mock.configure(&self.operation, self.id, |e| {
            e.repeat = Repeat::Times(times);
        });
        self
    }

    /// Make the expectation persistent: it matches an unlimited number of
    /// times and is never removed by consumption.
    pub fn persist(self) -> Self {
        self.mock.configure(&self.operation, self.id, |e| {
            e.repeat = Repeat::Forever;
        });
        self
    }
}
