//! Host test-context abstraction.
//!
//! The engine's only collaborator: something that can fail the current test
//! and record diagnostic output. The default implementation panics on
//! failure, which Rust test harnesses report as a failed test.

/// The host test context a mock is bound to.
///
/// Implement this to route failures and diagnostics into a custom harness
/// (e.g. one that collects failures instead of unwinding).
pub trait TestContext: Send + Sync {
    /// Fail the current test with the given message.
    ///
    /// Must not return: an unmatched call has no response to hand back, so
    /// the mocked method cannot continue.
    fn fail(&self, message: &str) -> !;

    /// Record a diagnostic line (unsatisfied-expectation reporting).
    fn log(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Default context: `fail` panics, `log` writes to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicContext;

impl TestContext for PanicContext {
    fn fail(&self, message: &str) -> ! {
        panic!("{}", message);
    }
}
