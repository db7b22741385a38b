//! File-based result sink.
//!
//! Appends each record as pretty-printed JSON plus a trailing newline
//! to a single log file, creating parent directories on first use. The
//! file is opened in append mode per write; there is no rotation and no
//! partial-write recovery.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::reporting::ResultRecord;
use crate::ports::{ResultSink, ResultSinkError};

/// Append-only log file sink.
#[derive(Debug, Clone)]
pub struct FileResultSink {
    path: PathBuf,
}

impl FileResultSink {
    /// Creates a sink writing to the given path.
    ///
    /// # Example
    /// ```ignore
    /// let sink = FileResultSink::new("./.ecoimpact/results.log");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<(), ResultSinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ResultSinkError::Io(e.to_string()))?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ResultSink for FileResultSink {
    async fn append(&self, record: &ResultRecord) -> Result<(), ResultSinkError> {
        self.ensure_parent_dir().await?;

        let mut entry = serde_json::to_string_pretty(record)
            .map_err(|e| ResultSinkError::Serialization(e.to_string()))?;
        entry.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| ResultSinkError::Io(e.to_string()))?;
        file.write_all(entry.as_bytes())
            .await
            .map_err(|e| ResultSinkError::Io(e.to_string()))?;

        Ok(())
    }
}
