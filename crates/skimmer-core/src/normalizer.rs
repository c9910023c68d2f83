//! Normalizer — converts decoded firehose events into canonical [`Post`]
//! records.
//!
//! Only post-creation events convert; every other event kind (deletions,
//! updates, likes, follows, …) yields `None` and is skipped without error.
//! Returning `None` is the skippable-event path: the session loop keeps
//! running, nothing is written.

use crate::cache::HandleCache;
use crate::types::{EventAction, Post, RepoEvent, POST_COLLECTION};

/// Build the deterministic post URI from a repository DID and record path.
///
/// Repeated delivery of the same logical post always yields the same URI,
/// and distinct `(repo, path)` pairs always yield distinct URIs (DIDs never
/// contain `/`).
pub fn post_uri(repo: &str, path: &str) -> String {
    format!("at://{repo}/{path}")
}

/// Convert a decoded event into a [`Post`], or `None` if the event is not a
/// post creation or lacks the fields needed for a valid URI.
///
/// Performs exactly one cache lookup (and at most one remote resolution, on
/// a cache miss) per converted event.
pub async fn normalize(event: &RepoEvent, cache: &mut HandleCache) -> Option<Post> {
    if event.action != EventAction::Create {
        tracing::debug!(action = ?event.action, "skipping non-create event");
        return None;
    }

    // `<collection>/<rkey>` with a non-empty rkey, in the post collection.
    let rkey = event
        .path
        .strip_prefix(POST_COLLECTION)
        .and_then(|rest| rest.strip_prefix('/'))?;
    if rkey.is_empty() || event.repo.is_empty() {
        tracing::debug!(repo = %event.repo, path = %event.path, "skipping event with incomplete identity");
        return None;
    }

    let author = cache.handle_for(&event.repo).await;

    let record = event.record.as_ref();
    let text = record
        .and_then(|r| r.text.clone())
        .unwrap_or_default();
    let created_at = record
        .and_then(|r| r.created_at.clone())
        .unwrap_or_default();
    let has_images = record
        .and_then(|r| r.embed.as_ref())
        .is_some_and(|embed| embed.has_images());
    let is_reply = record
        .and_then(|r| r.reply.as_ref())
        .is_some_and(|reply| reply.parent.is_some());

    Some(Post {
        text,
        created_at,
        author,
        uri: post_uri(&event.repo, &event.path),
        has_images,
        is_reply,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
