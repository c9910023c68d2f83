//! Writer — appends canonical [`Post`] records to a newline-delimited JSON
//! file.
//!
//! The file is opened once per session (append mode, created if absent) and
//! flushed after every record, so an interrupted process loses at most the
//! in-flight line. There is no rotation, no size limit, and no buffering
//! beyond the per-write flush.
//!
//! Writer failures are fatal to the owning session; they are never swallowed.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::types::Post;

/// A fatal output failure. Surfaced to the session, which stops immediately.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to append record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only NDJSON writer, exclusively owned by one session.
pub struct PostWriter {
    file: File,
    path: PathBuf,
    records_written: u64,
}

impl PostWriter {
    /// Open `path` for appending, creating it if absent. Called once at
    /// session start; the handle lives for the whole session.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, WriteError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| WriteError::Open {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "output file opened");
        Ok(Self {
            file,
            path,
            records_written: 0,
        })
    }

    /// Serialize `post` as a single JSON line, append it, and flush.
    pub async fn append(&mut self, post: &Post) -> Result<(), WriteError> {
        let mut line = serde_json::to_vec(post)?;
        line.push(b'\n');
        self.file.write_all(&line).await?;
        self.file.flush().await?;
        self.records_written += 1;
        Ok(())
    }

    /// Records appended since the writer was opened.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Path this writer appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and drop the file handle. The writer cannot be reused.
    pub async fn close(mut self) -> Result<(), WriteError> {
        self.file.flush().await?;
        tracing::debug!(path = %self.path.display(), records = self.records_written, "output file closed");
        Ok(())
    }
}
