//! skimmer — skims posts off the Bluesky firehose.
//!
//! One bounded-duration collection session per invocation: subscribe to a
//! firehose source, normalize each post-creation event into a canonical
//! record, and append it to a newline-delimited JSON file.
//!
//! # Architecture
//!
//! ```text
//! Firehose source ──► CollectionSession ──► Normalizer ──► PostWriter ──► .jsonl
//!                                               │
//!                                               └──► HandleCache (± remote resolve)
//! ```
//!
//! The pipeline stages live in `skimmer-core`; the source adapters live in
//! `skimmer-firehose`. This crate owns the session driver and the binary.

pub mod session;

pub use session::{CollectionSession, SessionError, SessionState, SessionSummary};
