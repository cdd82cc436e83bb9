//! The expectation registry and call dispatcher.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::builder::ExpectationHandle;
use super::expectation::{Expectation, Repeat};
use super::report::{SatisfactionReport, UnsatisfiedExpectation};
use crate::context::{PanicContext, TestContext};
use crate::error::MockError;
use crate::value::Value;

/// An immutable log entry for one matched invocation.
///
/// Records are appended to the per-operation history in call order and
/// never mutated afterwards; `reset` is the only way to clear them.
#[derive(Debug, Clone, Serialize)]
pub struct CallRecord {
    /// Operation that was invoked.
    pub operation: String,
    /// Arguments as received.
    pub arguments: Vec<Value>,
    /// Response as resolved from the winning expectation.
    pub response: Vec<Value>,
    /// Whether a live expectation accepted the call. Always true for
    /// records in the history: unmatched invocations are not recorded.
    pub matched: bool,
    /// True when the call was satisfied by a persistent expectation.
    pub persistent: bool,
    /// When the invocation arrived.
    pub timestamp: DateTime<Utc>,
}

/// Everything behind the registry lock: live expectations and call
/// history, both keyed by operation name, in registration/call order.
#[derive(Default)]
struct RegistryState {
    expectations: HashMap<String, Vec<Expectation>>,
    calls: HashMap<String, Vec<CallRecord>>,
    next_id: u64,
}

/// A mock instance: owns all expectations and call history for one test
/// double, and dispatches incoming calls against them.
///
/// All mutation happens under a single internal lock, so concurrent calls
/// from multiple threads within one test are safe: a single-use
/// expectation can never be consumed twice.
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
///     .will_return(args!["alice"]);
///
/// assert_eq!(store.call("get", args![1]), args!["alice"]);
/// assert!(store.is_satisfied());
/// ```
pub struct Mock {
    name: String,
    state: Mutex<RegistryState>,
    context: Box<dyn TestContext>,
}

impl Mock {
    /// Create a mock bound to the default context (panics on unmatched
    /// calls, logs diagnostics to stderr).
    pub fn new(name: &str) -> Self {
        Self::with_context(name, Box::new(PanicContext))
    }

    /// Create a mock bound to a caller-supplied test context.
    pub fn with_context(name: &str, context: Box<dyn TestContext>) -> Self {
        Self {
            name: name.to_string(),
            state: Mutex::new(RegistryState::default()),
            context,
        }
    }

    /// Display name of this mock, used as the prefix of every diagnostic.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a new expectation for `operation` and return a handle for
    /// configuring it.
    ///
    /// The expectation defaults to any arguments, an empty response, and a
    /// budget of one invocation. It is appended at the end of the
    /// operation's list: expectations are tried in registration order, so
    /// register more specific rules before a catch-all for the same
    /// arguments.
    pub fn register(&self, operation: &str) -> ExpectationHandle<'_> {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state
            .expectations
            .entry(operation.to_string())
            .or_default()
            .push(Expectation::new(id, operation));
        ExpectationHandle::new(self, operation, id)
    }

    /// Dispatch a call and return the matched expectation's response.
    ///
    /// On an unmatched call this fails through the host context and does
    /// not return; see [`try_call`](Self::try_call) for the non-panicking
    /// surface.
    pub fn call(&self, operation: &str, arguments: Vec<Value>) -> Vec<Value> {
        match self.try_call(operation, arguments) {
            Ok(response) => response,
            Err(err) => self.context.fail(&err.to_string()),
        }
    }

    /// Dispatch a call, returning an error instead of failing the test
    /// when no expectation matches.
    ///
    /// The whole operation runs under the registry lock: the operation's
    /// live expectations are scanned in registration order and the first
    /// one whose argument rule accepts the call wins. The winner's tally
    /// is incremented and its budget consumed; an expectation whose budget
    /// reaches zero is removed, so later calls fall through to the next
    /// rule in line. A matched call is appended to the history; an
    /// unmatched call leaves no record.
    pub fn try_call(
        &self,
        operation: &str,
        arguments: Vec<Value>,
    ) -> Result<Vec<Value>, MockError> {
        let called_at = Utc::now();
        let mut state = self.lock();

        let mut record = CallRecord {
            operation: operation.to_string(),
            arguments,
            response: Vec::new(),
            matched: false,
            persistent: false,
            timestamp: called_at,
        };

        if let Some(list) = state.expectations.get_mut(operation) {
            if let Some(idx) = list.iter().position(|e| e.args.accepts(&record.arguments)) {
                let expectation = &mut list[idx];
                expectation.invocations += 1;

                let mut exhausted = false;
                match expectation.repeat {
                    Repeat::Forever => record.persistent = true,
                    Repeat::Times(budget) => {
                        // Live finite expectations always hold a positive budget.
                        let budget = budget - 1;
                        expectation.repeat = Repeat::Times(budget);
                        exhausted = budget == 0;
                    }
                }

                record.matched = true;
                record.response = expectation.response.clone();

                if exhausted {
                    list.remove(idx);
                }

                let response = record.response.clone();
                state
                    .calls
                    .entry(record.operation.clone())
                    .or_default()
                    .push(record);
                return Ok(response);
            }
        }

        Err(MockError::UnmatchedCall {
            mock: self.name.clone(),
            operation: record.operation,
            arguments: record.arguments,
        })
    }

    /// Snapshot of the call history for one operation, in call order.
    pub fn calls(&self, operation: &str) -> Vec<CallRecord> {
        self.lock().calls.get(operation).cloned().unwrap_or_default()
    }

    /// Number of recorded calls for one operation.
    pub fn call_count(&self, operation: &str) -> usize {
        self.lock().calls.get(operation).map_or(0, Vec::len)
    }

    /// Clear all expectations and all call history.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.expectations.clear();
        state.calls.clear();
    }

    /// Evaluate whether every registered expectation has been satisfied,
    /// without side effects.
    ///
    /// A persistent expectation is satisfied once it has matched at least
    /// once; any finite-budget expectation still live in the registry is
    /// unsatisfied (fully consumed ones were already removed).
    pub fn verify(&self) -> SatisfactionReport {
        let state = self.lock();
        let mut unsatisfied = Vec::new();
        for list in state.expectations.values() {
            for expectation in list {
                match expectation.repeat {
                    Repeat::Forever if expectation.invocations > 0 => {}
                    repeat => unsatisfied.push(UnsatisfiedExpectation {
                        mock: self.name.clone(),
                        operation: expectation.operation.clone(),
                        arguments: expectation.args.describe(),
                        invocations: expectation.invocations,
                        pending: match repeat {
                            Repeat::Times(n) => Some(n),
                            Repeat::Forever => None,
                        },
                    }),
                }
            }
        }
        SatisfactionReport::new(unsatisfied)
    }

    /// Report whether every registered expectation has been satisfied,
    /// logging one diagnostic line per unsatisfied expectation through the
    /// host context.
    pub fn is_satisfied(&self) -> bool {
        let report = self.verify();
        for line in report.lines() {
            self.context.log(&line);
        }
        report.is_satisfied()
    }

    /// Fail the current test through the host context if any expectation
    /// is unsatisfied.
    pub fn assert_satisfied(&self) {
        let report = self.verify();
        if !report.is_satisfied() {
            self.context.fail(&report.to_string());
        }
    }

    /// Apply a configuration mutation to a registered expectation.
    ///
    /// Fails through the host context if the expectation is gone: that
    /// means setup code is still configuring a rule that calls have
    /// already consumed, or that `reset` swept away.
    pub(crate) fn configure<F>(&self, operation: &str, id: u64, mutate: F)
    where
        F: FnOnce(&mut Expectation),
    {
        let mut state = self.lock();
        let expectation = state
            .expectations
            .get_mut(operation)
            .and_then(|list| list.iter_mut().find(|e| e.id == id));
        match expectation {
            Some(expectation) => mutate(expectation),
            None => self.context.fail(&format!(
                "{}: expectation for {} is no longer registered (already consumed or reset)",
                self.name, operation
            )),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap()
    }
}

impl fmt::Debug for Mock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mock").field("name", &self.name).finish()
    }
}
