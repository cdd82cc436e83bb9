//! Dynamic argument and response values.
//!
//! Call arguments and responses are heterogeneous ordered sequences of
//! [`Value`], compared by deep structural equality (numbers, strings,
//! nested arrays and objects). The [`args!`](crate::args) macro builds a
//! value sequence from literals.

pub use serde_json::Value;

/// Render a value sequence for diagnostics, e.g. `1, "alice", true`.
///
/// Strings keep their quotes so `args!["1"]` and `args![1]` stay
/// distinguishable in failure messages.
pub(crate) fn format_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create an argument or response sequence from literal values.
///
/// The body is handed to `serde_json::json!` as an array, so anything that
/// macro accepts works here: numbers, strings, booleans, nested arrays and
/// objects, and interpolated expressions.
///
/// # Example
///
/// ```rust
/// use standin::args;
///
/// let arguments = args![1, "alice", true, {"role": "admin"}];
/// assert_eq!(arguments.len(), 4);
///
/// let empty = args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    ($($tokens:tt)*) => {
        match $crate::__json!([$($tokens)*]) {
            $crate::Value::Array(values) => values,
            _ => unreachable!(),
        }
    };
}
