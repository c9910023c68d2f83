//! Shared test utilities for skimmer integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers are deterministic; timing-sensitive tests
//! pair them with `#[tokio::test(start_paused = true)]`.

pub mod assertions;
pub mod fakes;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fakes::*;
pub use fixtures::*;
