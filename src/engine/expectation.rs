//! A single registered rule: which calls it matches and what it returns.

use std::fmt;

use crate::value::{format_values, Value};

/// A predicate over the full call argument sequence.
///
/// # Example
///
/// ```rust
/// use standin::{args, Matcher};
///
/// let over_ten = Matcher::new(|args| args[0].as_i64().unwrap_or(0) > 10);
/// assert!(over_ten.accepts(&args![11]));
/// assert!(!over_ten.accepts(&args![1]));
/// ```
pub struct Matcher(Box<dyn Fn(&[Value]) -> bool + Send + Sync>);

impl Matcher {
    /// Wrap a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        Self(Box::new(predicate))
    }

    /// Apply the predicate to an argument sequence.
    pub fn accepts(&self, arguments: &[Value]) -> bool {
        (self.0)(arguments)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}

/// How an expectation decides whether an argument list is acceptable.
///
/// Exact arguments and matchers are mutually exclusive by construction:
/// configuring one replaces the other.
#[derive(Debug)]
pub enum ArgSpec {
    /// Accept any argument list.
    Any,
    /// Deep structural equality against the full argument list: same
    /// length, same values, in order.
    Exact(Vec<Value>),
    /// Every predicate must accept the full argument list. An empty list
    /// trivially accepts every call.
    Matchers(Vec<Matcher>),
}

impl ArgSpec {
    pub(crate) fn accepts(&self, arguments: &[Value]) -> bool {
        match self {
            ArgSpec::Any => true,
            ArgSpec::Exact(expected) => expected.as_slice() == arguments,
            ArgSpec::Matchers(matchers) => matchers.iter().all(|m| m.accepts(arguments)),
        }
    }

    /// Human-readable form for diagnostics.
    pub(crate) fn describe(&self) -> String {
        match self {
            ArgSpec::Any => "<any arguments>".to_string(),
            ArgSpec::Exact(expected) => format_values(expected),
            ArgSpec::Matchers(_) => "<matcher-based>".to_string(),
        }
    }
}

/// Remaining invocation budget of an expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Finite budget. A live expectation always holds a positive count;
    /// it is removed from the registry the moment its budget reaches zero.
    Times(u32),
    /// Persistent: never exhausted by matching.
    Forever,
}

/// A registered rule for one operation.
///
/// Created by [`Mock::register`](crate::Mock::register) with a budget of
/// one invocation and no response, then configured through the returned
/// handle. Mutated afterwards only by the dispatcher's matching step,
/// under its lock.
#[derive(Debug)]
pub struct Expectation {
    pub(crate) id: u64,
    pub(crate) operation: String,
    pub(crate) args: ArgSpec,
    pub(crate) response: Vec<Value>,
    pub(crate) repeat: Repeat,
    pub(crate) invocations: u64,
}

impl Expectation {
    pub(crate) fn new(id: u64, operation: &str) -> Self {
        Self {
            id,
            operation: operation.to_string(),
            args: ArgSpec::Any,
            response: Vec::new(),
            repeat: Repeat::Times(1),
            invocations: 0,
        }
    }

    /// The operation this rule applies to.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// How many times this expectation has matched so far.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// Whether this expectation matches an unlimited number of times.
    pub fn is_persistent(&self) -> bool {
        self.repeat == Repeat::Forever
    }
}
