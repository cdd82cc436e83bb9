//! Error type for mock invocations.

use crate::value::{format_values, Value};

/// Error returned by the non-panicking call surface.
///
/// An unmatched call is fatal to the current test: the engine never retries,
/// and the caller's harness is expected to translate it into a test failure.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// No live expectation accepted the invocation.
    #[error("{mock}: no expectation found for {operation}({})", format_values(.arguments))]
    UnmatchedCall {
        /// Display name of the mock that received the call.
        mock: String,
        /// Operation that was invoked.
        operation: String,
        /// Arguments as received.
        arguments: Vec<Value>,
    },
}
