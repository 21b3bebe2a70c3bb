// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential record

use crate::id::RecordId;
use crate::record::{Entity, Record, RecordCore};
use crate::store::{Store, StoreError};
use async_trait::async_trait;
use fj_journal::{Journal, JournalError};
use serde_json::Value;

/// Journaled credential bound to a store
#[derive(Debug, Clone)]
pub struct Credential<S> {
    core: RecordCore,
    store: S,
}

impl<S: Store> Credential<S> {
    pub fn new(store: S) -> Self {
        Self::with_id(store, RecordId::generate())
    }

    pub fn with_id(store: S, id: RecordId) -> Self {
        Self {
            core: RecordCore::new(id),
            store,
        }
    }

    /// Rebuild a persisted credential; every stored field becomes an init
    pub fn from_fields<I>(store: S, id: RecordId, fields: I) -> Result<Self, JournalError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut journal = Journal::new();
        for (field, value) in fields {
            journal.record_init(field, value)?;
        }
        Ok(Self {
            core: RecordCore::from_parts(id, journal, None),
            store,
        })
    }

    /// Move this credential's state onto another store handle
    pub fn rebind<T: Store>(self, store: T) -> Credential<T> {
        Credential {
            core: self.core,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: Store> Entity for Credential<S> {
    fn core(&self) -> &RecordCore {
        &self.core
    }
}

#[async_trait]
impl<S: Store> Record for Credential<S> {
    fn core_mut(&mut self) -> &mut RecordCore {
        &mut self.core
    }

    async fn commit(&self) -> Result<(), StoreError> {
        tracing::debug!(
            id = %self.id(),
            pending = self.pending_changes().len(),
            "committing credential"
        );
        self.store.save_credential(self).await
    }

    async fn destroy(&self) -> Result<(), StoreError> {
        tracing::debug!(id = %self.id(), "destroying credential");
        self.store.destroy_credential(self).await
    }
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
