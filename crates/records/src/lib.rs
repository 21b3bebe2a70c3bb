// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! fj-records: journaled domain records backed by a pluggable store
//!
//! Records keep all field state in their journal and hand persistence off
//! to a `Store` injected at construction.

pub mod credential;
pub mod error;
pub mod id;
pub mod record;
pub mod schema;
pub mod store;
pub mod traced;
pub mod user;

pub use credential::Credential;
pub use error::RecordError;
pub use id::RecordId;
pub use record::{Entity, Record, RecordCore};
pub use schema::Schema;
pub use store::{MemoryStore, NoOpStore, Selector, Store, StoreError};
pub use traced::TracedStore;
pub use user::User;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeStore, StoreCall};
