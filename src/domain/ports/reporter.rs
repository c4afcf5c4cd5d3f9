//! Reporter Port
//!
//! Progress output for batch operations. The console UI, the NDJSON stream
//! and tests each provide an implementation.

/// Receives progress messages from the orchestrator and deployers
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    /// A step finished successfully
    fn done(&self, message: &str);

    /// Begin a long-running step; replaces any wait already in progress
    fn start_wait(&self, message: &str);

    /// End the current wait, if any
    fn stop_wait(&self);

    /// One line of forwarded cluster tool output
    fn output(&self, line: &str) {
        self.info(line);
    }
}

/// Keeps a wait indicator running until dropped
#[must_use = "the wait indicator stops as soon as the guard is dropped"]
pub struct WaitGuard<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> WaitGuard<'a> {
    pub fn start(reporter: &'a dyn Reporter, message: &str) -> Self {
        reporter.start_wait(message);
        Self { reporter }
    }

    /// Replace the message of the running wait
    pub fn update(&self, message: &str) {
        self.reporter.start_wait(message);
    }
}

impl Drop for WaitGuard<'_> {
    fn drop(&mut self) {
        self.reporter.stop_wait();
    }
}

/// Reporter that discards everything
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn done(&self, _message: &str) {}

    fn start_wait(&self, _message: &str) {}

    fn stop_wait(&self) {}

    fn output(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingReporter {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingReporter {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let lines = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    lines: lines.clone(),
                },
                lines,
            )
        }

        fn push(&self, line: String) {
            self.lines.lock().unwrap().push(line);
        }
    }

    impl Reporter for RecordingReporter {
        fn info(&self, message: &str) {
            self.push(format!("info {message}"));
        }

        fn warn(&self, message: &str) {
            self.push(format!("warn {message}"));
        }

        fn done(&self, message: &str) {
            self.push(format!("done {message}"));
        }

        fn start_wait(&self, message: &str) {
            self.push(format!("wait {message}"));
        }

        fn stop_wait(&self) {
            self.push("stop".to_string());
        }
    }

    #[test]
    fn wait_guard_stops_on_drop() {
        let (reporter, lines) = RecordingReporter::new();
        {
            let guard = WaitGuard::start(&reporter, "Deleting deployment api");
            guard.update("Deleting deployment api (helm)");
        }
        assert_eq!(
            *lines.lock().unwrap(),
            vec![
                "wait Deleting deployment api",
                "wait Deleting deployment api (helm)",
                "stop",
            ]
        );
    }

    #[test]
    fn wait_guard_stops_on_early_return() {
        fn run(reporter: &dyn Reporter, fail: bool) -> Result<(), &'static str> {
            let _wait = WaitGuard::start(reporter, "working");
            if fail {
                return Err("boom");
            }
            Ok(())
        }

        let (reporter, lines) = RecordingReporter::new();
        assert!(run(&reporter, true).is_err());
        assert_eq!(lines.lock().unwrap().last().map(String::as_str), Some("stop"));
    }

    #[test]
    fn output_defaults_to_info() {
        let (reporter, lines) = RecordingReporter::new();
        reporter.output("deployment.apps/api configured");
        assert_eq!(
            *lines.lock().unwrap(),
            vec!["info deployment.apps/api configured"]
        );
    }
}
