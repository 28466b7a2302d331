//! File-based data source.
//!
//! Polls a JSON file for risk record batches.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{RiskBatch, RiskSource};

/// A data source that reads risk batches from a JSON file.
///
/// The file holds a JSON array of records (the export format of the risk
/// backend's batch scorer). The source tracks the file's modification time
/// and only returns new data when the file has been updated.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being polled.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file's modification time.
    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Read and parse the file.
    fn read_file(&mut self) -> Option<RiskBatch> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(batch) => {
                    self.last_error = None;
                    Some(batch)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl RiskSource for FileSource {
    fn poll(&mut self) -> Option<RiskBatch> {
        let current_modified = self.get_modified_time();

        // Check if file has been modified since last read
        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, don't update
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(batch) = self.read_file() {
                self.last_modified = current_modified;
                return Some(batch);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"[
            {
                "deviceId": "dev-1001",
                "riskScore": 0.91,
                "category": "critical",
                "downtimeHours": 12
            }
        ]"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/risk.json");
        assert_eq!(source.path(), Path::new("/tmp/risk.json"));
        assert_eq!(source.description(), "file: /tmp/risk.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll should return data
        let batch = source.poll();
        assert!(batch.is_some());
        let batch = batch.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].device_id, "dev-1001");

        // Second poll without file change should return None
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_detects_changes() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll
        let _ = source.poll();

        // Modify the file (need to wait a bit for mtime to change)
        std::thread::sleep(std::time::Duration::from_millis(10));
        file.rewind().unwrap();
        writeln!(
            file,
            r#"[
            {{
                "deviceId": "dev-2000",
                "riskScore": 0.10,
                "category": "low",
                "downtimeHours": 0
            }}
        ]"#
        )
        .unwrap();
        file.flush().unwrap();

        // Poll again - should detect change
        // Note: This test may be flaky on some filesystems with low mtime resolution
        if let Some(batch) = source.poll() {
            assert_eq!(batch[0].device_id, "dev-2000");
        }
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/risk.json");

        let batch = source.poll();
        assert!(batch.is_none());
        assert!(source.error().is_some());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        let batch = source.poll();
        assert!(batch.is_none());
        assert!(source.error().is_some());
        assert!(source.error().unwrap().contains("Parse error"));
    }
}
