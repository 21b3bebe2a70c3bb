// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence collaborators for records

mod memory;
mod noop;

pub use memory::MemoryStore;
pub use noop::NoOpStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, StoreCall};

use crate::credential::Credential;
use crate::id::RecordId;
use crate::record::Entity;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field equality filter for lookups
pub type Selector = BTreeMap<String, Value>;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Store for user and credential records.
///
/// Handles are cheap clones over shared state and outlive the records bound
/// to them.
#[async_trait]
pub trait Store: Clone + Send + Sync + 'static {
    /// New credential record bound to this store
    fn create_credential(&self) -> Credential<Self> {
        Credential::new(self.clone())
    }

    /// Credentials whose stored fields match every selector entry
    async fn find_credentials(&self, selector: &Selector)
        -> Result<Vec<Credential<Self>>, StoreError>;

    async fn save_user(&self, user: &dyn Entity) -> Result<(), StoreError>;

    async fn delete_user(&self, user: &dyn Entity) -> Result<(), StoreError>;

    async fn save_credential(&self, credential: &dyn Entity) -> Result<(), StoreError>;

    async fn destroy_credential(&self, credential: &dyn Entity) -> Result<(), StoreError>;
}

/// True when every selector entry equals the field's value
pub fn matches_selector(fields: &BTreeMap<String, Value>, selector: &Selector) -> bool {
    selector
        .iter()
        .all(|(field, expected)| fields.get(field) == Some(expected))
}
