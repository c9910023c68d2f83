//! Core types for skimmer-core.
//!
//! This module defines the two data shapes the pipeline moves between: the
//! decoded firehose [`RepoEvent`] arriving from a source adapter, and the
//! canonical [`Post`] record the writer persists.
//!
//! Decoding happens once, at the transport boundary: source adapters
//! deserialize raw payloads into `RepoEvent`, so downstream stages only see
//! explicit `Option` fields, never dynamic lookups.

use serde::{Deserialize, Serialize};

/// The record collection that holds feed posts. Events whose `path` points
/// into any other collection (likes, reposts, follows, …) are skipped.
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// A canonical post record, one JSON object per output line.
///
/// Field order is fixed and matches the output format; `serde_json` emits
/// struct fields in declaration order, so reordering these changes the file
/// layout for human readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post body. Empty string if the record carried no text.
    pub text: String,
    /// ISO-8601 timestamp, passed through from the event source verbatim.
    pub created_at: String,
    /// Resolved author handle, or the raw DID if resolution failed.
    pub author: String,
    /// `at://{repo}/{path}` — deterministic per logical post.
    pub uri: String,
    /// True if the record embeds at least one image.
    pub has_images: bool,
    /// True if the record declares a reply parent.
    pub is_reply: bool,
}

/// A decoded repository event delivered by a firehose source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoEvent {
    /// What the event does to the repository.
    pub action: EventAction,
    /// Repository (account) DID that authored the event.
    #[serde(default)]
    pub repo: String,
    /// Record path within the repository: `<collection>/<rkey>`.
    #[serde(default)]
    pub path: String,
    /// Record payload. Present for creations, absent for deletions.
    #[serde(default)]
    pub record: Option<PostRecord>,
}

/// Repository operation kind, tagged on the wire as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Create,
    Update,
    Delete,
    /// Any action this collector does not recognise. Decoded rather than
    /// rejected so unknown event kinds stay skippable, not fatal.
    #[serde(other)]
    Other,
}

/// The payload of a post-creation event. Every field the collector does not
/// strictly need is optional; absent fields become defaults downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyRef>,
}

/// Embedded media attached to a post record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    /// Embed type tag, e.g. `app.bsky.embed.images`.
    #[serde(default, rename = "$type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Image attachments. Opaque to the collector beyond their count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<serde_json::Value>>,
}

impl Embed {
    /// True if this embed carries at least one image.
    pub fn has_images(&self) -> bool {
        self.images.as_ref().is_some_and(|imgs| !imgs.is_empty())
    }
}

/// Reply references on a post record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplyRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<RecordRef>,
}

/// A reference to another record by URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordRef {
    #[serde(default)]
    pub uri: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
