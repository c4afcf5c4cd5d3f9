//! JSON Reporter
//!
//! Emits progress as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

use crate::domain::ports::Reporter;

/// Reporter that writes one JSON object per line
pub struct JsonReporter {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonReporter {
    /// Write events for `command` to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Write events to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn emit(&self, event: &str, message: Option<&str>) {
        let mut json = serde_json::json!({
            "event": event,
            "command": self.command,
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        if let Some(message) = message {
            json["message"] = serde_json::Value::from(message);
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }
    }
}

impl Reporter for JsonReporter {
    fn info(&self, message: &str) {
        self.emit("info", Some(message));
    }

    fn warn(&self, message: &str) {
        self.emit("warn", Some(message));
    }

    fn done(&self, message: &str) {
        self.emit("done", Some(message));
    }

    fn start_wait(&self, message: &str) {
        self.emit("wait_start", Some(message));
    }

    fn stop_wait(&self) {
        self.emit("wait_stop", None);
    }

    fn output(&self, line: &str) {
        self.emit("output", Some(line));
    }
}
