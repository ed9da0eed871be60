use std::sync::Mutex;

use crate::reporter::Reporter;

/// Reporter that keeps every failure message in memory.
///
/// Useful when a test wants to check *which* assertions failed rather than
/// stopping at the first one.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of failures reported so far.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Forgets all recorded messages.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock leaves the vector intact, so keep using it.
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_clears() {
        let reporter = RecordingReporter::new();
        assert_eq!(reporter.count(), 0);

        reporter.report("first");
        reporter.report("second");
        assert_eq!(reporter.messages(), vec!["first".to_string(), "second".to_string()]);

        reporter.clear();
        assert_eq!(reporter.count(), 0);
        assert!(reporter.messages().is_empty());
    }
}
