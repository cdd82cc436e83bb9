//! Satisfaction reporting for end-of-test verification.

use std::fmt;

/// One expectation that still required calls when verification ran.
#[derive(Debug, Clone)]
pub struct UnsatisfiedExpectation {
    /// Display name of the owning mock.
    pub mock: String,
    /// Operation the expectation targets.
    pub operation: String,
    /// Human-readable argument description: the exact argument list,
    /// `<matcher-based>`, or `<any arguments>`.
    pub arguments: String,
    /// How many times the expectation matched so far.
    pub invocations: u64,
    /// Remaining finite budget; `None` for a persistent expectation that
    /// never matched.
    pub pending: Option<u32>,
}

impl UnsatisfiedExpectation {
    /// The diagnostic line logged for this expectation.
    pub fn diagnostic(&self) -> String {
        if self.invocations == 0 {
            format!(
                "{}: expectation {}({}) was never called",
                self.mock, self.operation, self.arguments
            )
        } else {
            format!(
                "{}: expectation {}({}) matched {} times but has {} pending calls",
                self.mock,
                self.operation,
                self.arguments,
                self.invocations,
                self.pending.unwrap_or(0)
            )
        }
    }
}

/// Result of verifying a mock at the end of a test.
///
/// Renders one diagnostic line per unsatisfied expectation via `Display`.
#[derive(Debug, Clone, Default)]
pub struct SatisfactionReport {
    unsatisfied: Vec<UnsatisfiedExpectation>,
}

impl SatisfactionReport {
    pub(crate) fn new(unsatisfied: Vec<UnsatisfiedExpectation>) -> Self {
        Self { unsatisfied }
    }

    /// True iff no expectation is unsatisfied.
    pub fn is_satisfied(&self) -> bool {
        self.unsatisfied.is_empty()
    }

    /// The unsatisfied expectations, one entry per live rule.
    pub fn unsatisfied(&self) -> &[UnsatisfiedExpectation] {
        &self.unsatisfied
    }

    /// Diagnostic lines, one per unsatisfied expectation.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.unsatisfied.iter().map(UnsatisfiedExpectation::diagnostic)
    }
}

impl fmt::Display for SatisfactionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unsatisfied.is_empty() {
            return f.write_str("all expectations satisfied");
        }
        let lines: Vec<String> = self.lines().collect();
        f.write_str(&lines.join("\n"))
    }
}
