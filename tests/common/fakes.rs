//! Fake collaborators for the resolution and transport seams.
//!
//! `CountingResolver` and `FailingResolver` record every remote call so
//! harnesses can assert the cache's one-call-per-DID guarantee. Scripted
//! event streams come from `skimmer_firehose::channel::channel_source`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use skimmer_core::cache::{HandleResolver, ResolveError};
use skimmer_core::RepoEvent;
use skimmer_firehose::channel::{channel_source, ChannelSource};

/// Shared log of DIDs a fake resolver was asked to resolve.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Count how many times `did` appears in a call log.
pub fn calls_for(log: &CallLog, did: &str) -> usize {
    log.lock().unwrap().iter().filter(|d| *d == did).count()
}

/// Resolver backed by a map, recording every remote call it receives.
pub struct CountingResolver {
    handles: HashMap<String, String>,
    calls: CallLog,
}

impl CountingResolver {
    /// Build from `(did, handle)` pairs; returns the resolver and its call log.
    pub fn with_handles(pairs: &[(&str, &str)]) -> (Self, CallLog) {
        let handles = pairs
            .iter()
            .map(|(did, handle)| (did.to_string(), handle.to_string()))
            .collect();
        let calls = CallLog::default();
        (
            Self {
                handles,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl HandleResolver for CountingResolver {
    async fn resolve(&self, did: &str) -> Result<String, ResolveError> {
        self.calls.lock().unwrap().push(did.to_string());
        self.handles
            .get(did)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(did.to_string()))
    }
}

/// Resolver that fails every call, recording each attempt.
pub struct FailingResolver {
    calls: CallLog,
}

impl FailingResolver {
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl HandleResolver for FailingResolver {
    async fn resolve(&self, did: &str) -> Result<String, ResolveError> {
        self.calls.lock().unwrap().push(did.to_string());
        Err(ResolveError::Timeout)
    }
}

// ---------------------------------------------------------------------------
// Scripted sources
// ---------------------------------------------------------------------------

/// A source that delivers `events` in order and then ends cleanly.
pub fn scripted_source(events: Vec<RepoEvent>) -> ChannelSource {
    let (handle, source) = channel_source();
    for event in events {
        handle.send(event);
    }
    handle.close();
    source
}
