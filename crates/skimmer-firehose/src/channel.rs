//! ChannelSource — an in-process firehose fed through a tokio channel.
//!
//! Used by the test harnesses to script exact event sequences, and usable as
//! a bridge when a protocol client decodes events on another task. Dropping
//! the handle closes the stream cleanly; pushing a [`TransportError`]
//! simulates (or forwards) a fatal disconnect.

use async_trait::async_trait;
use skimmer_core::RepoEvent;
use tokio::sync::mpsc;

use crate::{FirehoseSource, TransportError};

/// Sending half of a [`ChannelSource`] pair.
pub struct ChannelSourceHandle {
    tx: mpsc::UnboundedSender<Result<RepoEvent, TransportError>>,
}

impl ChannelSourceHandle {
    /// Deliver one decoded event.
    pub fn send(&self, event: RepoEvent) {
        let _ = self.tx.send(Ok(event));
    }

    /// Deliver a fatal transport failure.
    pub fn fail(&self, err: TransportError) {
        let _ = self.tx.send(Err(err));
    }

    /// End the stream cleanly.
    pub fn close(self) {
        // tx is dropped, causing the channel to close.
    }
}

/// Receiving half: a [`FirehoseSource`] backed by the channel.
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<Result<RepoEvent, TransportError>>,
}

#[async_trait]
impl FirehoseSource for ChannelSource {
    async fn next_event(&mut self) -> Result<Option<RepoEvent>, TransportError> {
        match self.rx.recv().await {
            Some(Ok(event)) => Ok(Some(event)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

/// Create a linked handle/source pair.
///
/// ```rust,no_run
/// # use skimmer_firehose::channel::channel_source;
/// let (handle, source) = channel_source();
/// ```
pub fn channel_source() -> (ChannelSourceHandle, ChannelSource) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSourceHandle { tx }, ChannelSource { rx })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
