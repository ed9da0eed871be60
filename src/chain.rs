//! Failure state shared along an assertion chain.
//!
//! A [`Chain`] couples a reporter with a single "already failed" flag. Every
//! [`Response`](crate::Response) owns one, and every wrapper it hands out
//! (headers, body, JSON tree and the narrowed JSON views) receives a
//! *clone* of it.
//!
//! # Propagation model
//! - Cloning copies the flag as it is *right now*. A wrapper derived from a
//!   failed response starts out failed; a wrapper derived before the parent
//!   failed never learns about it.
//! - Failures never flow back: a failed wrapper leaves its parent untouched.
//! - The flag is monotonic. Only the test-only `reset()` clears it.
//!
//! Assertions on a failed chain short-circuit, so one broken precondition is
//! reported once instead of cascading through every derived check.
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use crate::config::ExpectConfig;
use crate::reporter::ReporterHandle;

const LOG_TARGET: &str = "http_expect::chain";

#[derive(Clone)]
pub struct Chain {
    reporter: ReporterHandle,
    config: Arc<ExpectConfig>,
    failed: Cell<bool>,
}

impl Chain {
    /// Creates a fresh, non-failed chain.
    pub fn new(reporter: ReporterHandle, config: Arc<ExpectConfig>) -> Self {
        Self {
            reporter,
            config,
            failed: Cell::new(false),
        }
    }

    /// Marks the chain as failed and hands `message` to the reporter.
    ///
    /// The reporter is called on every invocation, even if the chain had
    /// already failed before.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.failed.set(true);

        if let Some(level) = self.config.failure_log_level.to_level() {
            log::log!(target: LOG_TARGET, level, "{message}");
        }
        self.reporter.report(&message);
    }

    /// Evaluates `ok` and fails with `message` if it does not hold.
    ///
    /// Nothing is evaluated when the chain has already failed. Returns
    /// whether the chain is still ok afterwards.
    pub fn check(&self, ok: impl FnOnce() -> bool, message: impl FnOnce() -> String) -> bool {
        if self.is_failed() {
            return false;
        }
        if !ok() {
            self.fail(message());
            return false;
        }
        true
    }

    pub fn is_failed(&self) -> bool {
        self.failed.get()
    }

    pub fn config(&self) -> &ExpectConfig {
        &self.config
    }

    /// Shortens an actual value for inclusion in a failure message.
    pub fn preview(&self, text: &str) -> String {
        self.config.preview(text)
    }

    #[cfg(test)]
    #[track_caller]
    pub(crate) fn assert_failed(&self) {
        assert!(self.is_failed(), "expected chain to be failed");
    }

    #[cfg(test)]
    #[track_caller]
    pub(crate) fn assert_ok(&self) {
        assert!(!self.is_failed(), "expected chain to be ok");
    }

    #[cfg(test)]
    pub(crate) fn reset(&self) {
        self.failed.set(false);
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("failed", &self.failed.get())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
