// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fj-journal: per-field operation journal
//!
//! This crate provides:
//! - Immutable `Operation` entries (init, set, delete)
//! - An append-only `Journal` with last-writer-wins compaction
//! - Configurable projections of the journal into snapshots

pub mod error;
pub mod journal;
pub mod operation;
pub mod projection;

pub use error::JournalError;
pub use journal::{Journal, JournalStats};
pub use operation::{OpKind, Operation};
pub use projection::{OutputShape, ProjectOptions, Projection, ProjectionOutput};
