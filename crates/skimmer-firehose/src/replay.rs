//! ReplaySource — newline-delimited JSON events from a buffered reader.
//!
//! One decoded [`RepoEvent`] per line. Lines that fail to decode are
//! skippable: they are logged and dropped, and the stream keeps going.
//! IO failures from the underlying reader are fatal transport errors.

use async_trait::async_trait;
use skimmer_core::RepoEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::{FirehoseSource, TransportError};

/// Reads decoded events from newline-delimited JSON, e.g. a capture file or
/// stdin.
pub struct ReplaySource<R> {
    lines: Lines<R>,
    line_no: u64,
}

impl<R> ReplaySource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

#[async_trait]
impl<R> FirehoseSource for ReplaySource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_event(&mut self) -> Result<Option<RepoEvent>, TransportError> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<RepoEvent>(&line) {
                Ok(event) => return Ok(Some(event)),
                Err(err) => {
                    tracing::warn!(line = self.line_no, %err, "skipping undecodable event");
                    continue;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
