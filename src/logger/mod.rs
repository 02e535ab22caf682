pub mod file;
pub mod subscriber;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileLog;

/// Default event log location, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Timestamp prefix written in front of every event log line.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Error opening log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only sink for the heartbeat's event lines.
pub trait EventLog: Send + Sync {
    fn append(&self, line: &str);
}

/// In-memory event log used by the loop tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryLog {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl EventLog for MemoryLog {
    fn append(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
