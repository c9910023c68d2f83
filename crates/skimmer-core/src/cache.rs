//! Handle cache — session-scoped memoization of author identity lookups.
//!
//! The firehose identifies authors by DID; turning a DID into a
//! human-readable handle requires a remote lookup through a
//! [`HandleResolver`]. The cache guarantees at most one remote call per DID
//! per session: successful resolutions are stored, and failed resolutions are
//! stored as the raw DID so a consistently-unresolvable author never triggers
//! repeated remote traffic.
//!
//! The cache never evicts and never persists. It lives exactly as long as the
//! session that owns it, and author cardinality within a bounded session
//! keeps it small.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Why a handle resolution failed. All variants are non-fatal to the
/// pipeline; the caller falls back to the raw DID.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no handle known for {0}")]
    NotFound(String),
    #[error("handle resolution timed out")]
    Timeout,
    #[error("malformed resolution response: {0}")]
    Malformed(String),
}

/// Maps a DID to a handle. The real network resolver lives outside this
/// crate; tests and replay runs use the implementations below.
#[async_trait]
pub trait HandleResolver: Send + Sync {
    async fn resolve(&self, did: &str) -> Result<String, ResolveError>;
}

/// Session-scoped DID → handle cache wrapping a [`HandleResolver`].
pub struct HandleCache {
    handles: HashMap<String, String>,
    resolver: Box<dyn HandleResolver>,
}

impl HandleCache {
    pub fn new(resolver: Box<dyn HandleResolver>) -> Self {
        Self {
            handles: HashMap::new(),
            resolver,
        }
    }

    /// Return the handle for `did`, consulting the resolver on a cache miss.
    ///
    /// Never fails: a failed resolution falls back to the raw DID, and the
    /// fallback is cached so the resolver is asked once per DID per session.
    pub async fn handle_for(&mut self, did: &str) -> String {
        if let Some(handle) = self.handles.get(did) {
            return handle.clone();
        }

        let handle = match self.resolver.resolve(did).await {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(%did, %err, "handle resolution failed, falling back to DID");
                did.to_string()
            }
        };

        self.handles.insert(did.to_string(), handle.clone());
        handle
    }

    /// Number of distinct DIDs seen so far.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Resolver implementations
// ---------------------------------------------------------------------------

/// Resolver backed by a preloaded DID → handle map. Used for replay runs
/// (`--handles`) and in tests.
pub struct StaticResolver {
    handles: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new(handles: HashMap<String, String>) -> Self {
        Self { handles }
    }
}

#[async_trait]
impl HandleResolver for StaticResolver {
    async fn resolve(&self, did: &str) -> Result<String, ResolveError> {
        self.handles
            .get(did)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(did.to_string()))
    }
}

/// Resolver that never resolves anything; every author falls back to their
/// DID. The default when no handle map is supplied.
pub struct NullResolver;

#[async_trait]
impl HandleResolver for NullResolver {
    async fn resolve(&self, did: &str) -> Result<String, ResolveError> {
        Err(ResolveError::NotFound(did.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
