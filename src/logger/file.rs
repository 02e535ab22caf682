use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local, TimeZone};

use super::{EventLog, LogError, TIMESTAMP_FORMAT};

/// Event log backed by a text file opened in append mode.
///
/// The file is created when missing and never truncated or rotated. The
/// handle stays open until the log is dropped.
pub struct FileLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render one log line with its timestamp prefix.
pub fn stamp<Tz>(at: &DateTime<Tz>, line: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} {}", at.format(TIMESTAMP_FORMAT), line)
}

impl EventLog for FileLog {
    fn append(&self, line: &str) {
        tracing::info!("{line}");

        let entry = stamp(&Local::now(), line);
        let result = match self.file.lock() {
            Ok(mut file) => writeln!(file, "{entry}"),
            Err(_) => return,
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to write event log");
        }
    }
}
