//! Audit log for validation outcomes
//!
//! Console logging goes through the `log` facade. This logger writes a
//! plain-text record of every validated file to a separate file so that
//! upload decisions can be reviewed later.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::validation::result::ValidationResult;

/// File-backed audit logger
pub struct Logger {
    /// File handle for log output, `None` when auditing is off
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "audit log lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Records the outcome for one file
    ///
    /// Writes `ACCEPT <name>` or `REJECT <name> <code>: <message>`.
    pub fn record(&self, name: &str, result: &ValidationResult) -> io::Result<()> {
        let line = match (result.kind(), result.error()) {
            (Some(kind), Some(error)) => format!("REJECT {} {}: {}", name, kind.code(), error),
            _ => format!("ACCEPT {}", name),
        };
        self.log(&line)
    }
}
