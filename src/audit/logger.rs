//! Activity log file
//!
//! One JSON object per line, appended. Reading keeps only the tail that
//! `history` asks for; a line that fails to parse is skipped with a warning
//! so one bad write never hides the rest of the history.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{EduEasyError, EduEasyResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn append(&self, entry: &AuditEntry) -> EduEasyResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| EduEasyError::Io(format!("Failed to write activity log: {}", e)))
    }

    /// The last `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> EduEasyResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(EduEasyError::Io(format!("Failed to open activity log: {}", e)))
            }
        };

        let mut tail = VecDeque::with_capacity(limit.min(256));
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line
                .map_err(|e| EduEasyError::Io(format!("Failed to read activity log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => {
                    if tail.len() == limit {
                        tail.pop_front();
                    }
                    if limit > 0 {
                        tail.push_back(entry);
                    }
                }
                Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable history line"),
            }
        }

        Ok(tail.into())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{Action, Subject};
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn expense(index: usize) -> AuditEntry {
        AuditEntry::added(
            Subject::Expense,
            format!("exp-{}", index),
            "Food",
            Some(Money::from_units(index as i64)),
        )
    }

    #[test]
    fn test_append_and_read_back() {
        let (logger, _temp) = create_test_logger();
        logger.append(&expense(1)).unwrap();
        logger.append(&AuditEntry::earned("badge-novice", "Financial Novice")).unwrap();

        let entries = logger.recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].amount, Some(Money::from_units(1)));
        assert_eq!(entries[1].action, Action::Earned);
    }

    #[test]
    fn test_recent_keeps_the_tail() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.append(&expense(i)).unwrap();
        }

        let recent = logger.recent(3).unwrap();
        let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["exp-7", "exp-8", "exp-9"]);
        assert!(logger.recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_line_is_skipped() {
        let (logger, _temp) = create_test_logger();
        logger.append(&expense(1)).unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file, "not json").unwrap();
        logger.append(&expense(2)).unwrap();

        let entries = logger.recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, "exp-2");
    }
}
