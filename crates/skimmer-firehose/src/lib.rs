//! skimmer-firehose — firehose source adapters for skimmer.
//!
//! A source delivers decoded [`RepoEvent`](skimmer_core::RepoEvent)s to the
//! collection session as an ordered sequence. The session drains one event at
//! a time; `Ok(None)` means the stream ended cleanly, and any `Err` is fatal
//! for the session (no reconnect is attempted here — that belongs to an
//! external supervisor).
//!
//! Two adapters ship with the crate:
//!
//! - [`replay::ReplaySource`] reads newline-delimited JSON events from any
//!   buffered async reader (stdin, or a capture file via `--replay`).
//! - [`channel::ChannelSource`] is fed from an in-process channel, for tests
//!   and for bridging a protocol client running on another task.

pub mod channel;
pub mod replay;

use async_trait::async_trait;
use skimmer_core::RepoEvent;
use thiserror::Error;

/// A fatal stream transport failure. Ends the owning session.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("stream transport io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("stream transport disconnected: {0}")]
    Disconnected(String),
}

/// An ordered source of decoded firehose events.
#[async_trait]
pub trait FirehoseSource: Send {
    /// Wait for and return the next event. `Ok(None)` is a clean end of
    /// stream; `Err` is fatal to the session.
    async fn next_event(&mut self) -> Result<Option<RepoEvent>, TransportError>;
}
