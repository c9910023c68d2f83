//! skimmer-core — core library for the skimmer firehose collector.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across all stages.
//!
//! # Architecture
//!
//! ```text
//! Firehose source ──► Session ──► Normalizer ──► Writer ──► .jsonl file
//!                                     │
//!                                     └──► Handle cache (± remote resolve)
//! ```
//!
//! The session drives everything on a single logical task; the only
//! suspension points are the wait for the next event and a cache-miss
//! handle resolution.

pub mod cache;
pub mod config;
pub mod normalizer;
pub mod types;
pub mod writer;

pub use types::{Embed, EventAction, Post, PostRecord, RecordRef, RepoEvent, ReplyRef};
