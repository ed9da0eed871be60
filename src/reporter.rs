//! Failure reporters.
//!
//! A **reporter** is the sink every failed assertion is handed to. The
//! assertion core never stops on its own: it marks the chain as failed and
//! calls [`Reporter::report`] once per failing assertion. Whether that ends
//! the enclosing test is up to the reporter:
//! - [`PanicReporter`] panics, which fails a `#[test]` immediately.
//! - [`LogReporter`] logs the failure through the `log` facade and lets the
//!   test continue.
//! - [`NoopReporter`] drops failures; callers inspect `is_failed()` instead.
//! - [`RecordingReporter`] keeps every message for later inspection.
mod recording;

use std::sync::Arc;

pub use recording::RecordingReporter;

/// Receives human-readable descriptions of failed assertions.
///
/// Implementations must be `Send + Sync` so a single reporter can be shared
/// by several responses.
pub trait Reporter: Send + Sync {
    /// Called once for every failing assertion.
    fn report(&self, message: &str);
}

/// A handle to a reporter trait object.
pub type ReporterHandle = Arc<dyn Reporter>;

/// Panics with the failure message.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn report(&self, message: &str) {
        panic!("{message}");
    }
}

/// Logs failures at `error` level and continues.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, message: &str) {
        log::error!("assertion failed: {message}");
    }
}

/// Ignores failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _message: &str) {}
}
