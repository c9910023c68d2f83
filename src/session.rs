//! Collection session — drives the firehose → normalizer → writer pipeline
//! for one bounded-duration run.
//!
//! The session is an explicit `Idle → Running → Stopped` machine. `Stopped`
//! is terminal: [`CollectionSession::run`] consumes the session, so a new run
//! needs a new session. Everything happens on a single logical task; the
//! cancellation token and the deadline are checked at the top of every loop
//! iteration, and an in-flight normalize/append always completes before the
//! loop exits.

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use skimmer_core::cache::HandleCache;
use skimmer_core::normalizer::normalize;
use skimmer_core::writer::{PostWriter, WriteError};
use skimmer_firehose::{FirehoseSource, TransportError};

/// Session lifecycle. `Running → Stopped` happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Stopped,
}

/// Why the event loop exited cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopCause {
    DeadlineReached,
    Cancelled,
    StreamEnded,
}

/// A fatal per-resource failure. Per-event problems never surface here; they
/// are skipped inside the loop.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("write failure: {0}")]
    Write(#[from] WriteError),
}

/// What a finished session reports to the operator.
#[derive(Debug, Clone, Copy)]
pub struct SessionSummary {
    pub posts_collected: u64,
    pub elapsed: Duration,
}

impl SessionSummary {
    /// Average collection rate in posts per second.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.posts_collected as f64 / secs
        } else {
            0.0
        }
    }
}

/// One bounded-duration collection run over a firehose source.
pub struct CollectionSession<S> {
    source: S,
    cache: HandleCache,
    writer: PostWriter,
    duration: Duration,
    cancel: CancellationToken,
    state: SessionState,
    posts_collected: u64,
}

impl<S: FirehoseSource> CollectionSession<S> {
    pub fn new(
        source: S,
        cache: HandleCache,
        writer: PostWriter,
        duration: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            source,
            cache,
            writer,
            duration,
            cancel,
            state: SessionState::Idle,
            posts_collected: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session to completion and return the final summary.
    ///
    /// Stops cleanly on deadline expiry, cancellation, or end of stream;
    /// aborts with [`SessionError`] on a transport or write failure. Either
    /// way the session ends `Stopped` and cannot be restarted.
    pub async fn run(mut self) -> Result<SessionSummary, SessionError> {
        let started = Instant::now();
        let started_at = chrono::Utc::now();
        let deadline = started + self.duration;
        self.state = SessionState::Running;
        tracing::info!(
            duration_secs = self.duration.as_secs(),
            %started_at,
            "collection session started"
        );

        let cancel = self.cancel.clone();
        let cause = loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break StopCause::Cancelled,
                _ = tokio::time::sleep_until(deadline) => break StopCause::DeadlineReached,
                event = self.source.next_event() => match event {
                    Ok(Some(event)) => {
                        if let Some(post) = normalize(&event, &mut self.cache).await {
                            if let Err(err) = self.writer.append(&post).await {
                                self.state = SessionState::Stopped;
                                tracing::error!(%err, "write failure, stopping session");
                                return Err(err.into());
                            }
                            self.posts_collected += 1;
                        }
                    }
                    Ok(None) => break StopCause::StreamEnded,
                    Err(err) => {
                        self.state = SessionState::Stopped;
                        tracing::error!(%err, "transport failure, stopping session");
                        return Err(err.into());
                    }
                },
            }
        };

        self.state = SessionState::Stopped;
        self.writer.close().await?;

        let summary = SessionSummary {
            posts_collected: self.posts_collected,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            posts = summary.posts_collected,
            elapsed_secs = summary.elapsed.as_secs_f64(),
            cause = ?cause,
            authors_seen = self.cache.len(),
            "collection session stopped"
        );
        Ok(summary)
    }
}
