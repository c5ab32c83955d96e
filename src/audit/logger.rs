//! Append-only audit log
//!
//! The log is line-delimited JSON: one `AuditRecord` per line, appended and
//! flushed as each change is made.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{PocketbookError, PocketbookResult};

use super::record::{AuditRecord, Change};

/// Writes and reads the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `change`, stamped with the current time
    pub fn record(&self, change: Change) -> PocketbookResult<AuditRecord> {
        let record = AuditRecord::now(change);
        self.append(&record)?;
        Ok(record)
    }

    /// Append one record as a single JSON line
    pub fn append(&self, record: &AuditRecord) -> PocketbookResult<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                PocketbookError::Io(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;
        file.write_all(&line)
            .and_then(|()| file.flush())
            .map_err(|e| PocketbookError::Io(format!("Failed to write audit log: {}", e)))
    }

    /// Every record in the log, oldest first
    ///
    /// A missing log is empty. A line that does not parse is an error naming
    /// the line.
    pub fn read_all(&self) -> PocketbookResult<Vec<AuditRecord>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PocketbookError::Io(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                )))
            }
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditRecord>()
            .map(|record| {
                record.map_err(|e| {
                    PocketbookError::Json(format!(
                        "Failed to parse audit log at line {}: {}",
                        e.line(),
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` records, oldest first
    pub fn read_recent(&self, count: usize) -> PocketbookResult<Vec<AuditRecord>> {
        let mut records = self.read_all()?;
        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
