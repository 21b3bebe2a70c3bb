// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process store keeping the latest saved fields of each record

use super::{matches_selector, Selector, Store, StoreError};
use crate::credential::Credential;
use crate::id::RecordId;
use crate::record::{Entity, Record};
use crate::schema::Schema;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Persisted form of one record
#[derive(Debug, Clone, Default, PartialEq)]
struct StoredRecord {
    fields: BTreeMap<String, Value>,
    schema: Option<Schema>,
}

impl StoredRecord {
    /// Fold a record's snapshot in: values upsert, deletes remove
    fn apply(&mut self, entity: &dyn Entity) {
        let snapshot = entity.snapshot();
        for (field, value) in snapshot.iter() {
            match value {
                Some(value) if !snapshot.is_deleted(field) => {
                    self.fields.insert(field.to_string(), value.clone());
                }
                _ => {
                    self.fields.remove(field);
                }
            }
        }
        if let Some(schema) = entity.schema() {
            self.schema = Some(schema.clone());
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeMap<RecordId, StoredRecord>,
    credentials: BTreeMap<RecordId, StoredRecord>,
}

/// Store backed by process memory.
///
/// Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    /// Saved fields of a user, if it has been committed
    pub fn user_fields(&self, id: &RecordId) -> Option<BTreeMap<String, Value>> {
        self.with_state(|state| state.users.get(id).map(|r| r.fields.clone()))
    }

    /// Saved fields of a credential, if it has been committed
    pub fn credential_fields(&self, id: &RecordId) -> Option<BTreeMap<String, Value>> {
        self.with_state(|state| state.credentials.get(id).map(|r| r.fields.clone()))
    }

    pub fn credential_schema(&self, id: &RecordId) -> Option<Schema> {
        self.with_state(|state| state.credentials.get(id).and_then(|r| r.schema.clone()))
    }

    pub fn user_count(&self) -> usize {
        self.with_state(|state| state.users.len())
    }

    pub fn credential_count(&self) -> usize {
        self.with_state(|state| state.credentials.len())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_credentials(
        &self,
        selector: &Selector,
    ) -> Result<Vec<Credential<Self>>, StoreError> {
        let matches: Vec<(RecordId, StoredRecord)> = self.with_state(|state| {
            state
                .credentials
                .iter()
                .filter(|(_, record)| matches_selector(&record.fields, selector))
                .map(|(id, record)| (id.clone(), record.clone()))
                .collect()
        });

        tracing::debug!(
            selector_len = selector.len(),
            found = matches.len(),
            "credentials found"
        );

        matches
            .into_iter()
            .map(|(id, record)| {
                let mut credential = Credential::from_fields(self.clone(), id, record.fields)
                    .map_err(|e| StoreError::Rejected(e.to_string()))?;
                if let Some(schema) = record.schema {
                    credential.create_schema(schema);
                }
                Ok(credential)
            })
            .collect()
    }

    async fn save_user(&self, user: &dyn Entity) -> Result<(), StoreError> {
        self.with_state(|state| {
            state.users.entry(user.id().clone()).or_default().apply(user);
        });
        tracing::debug!(id = %user.id(), "user saved");
        Ok(())
    }

    async fn delete_user(&self, user: &dyn Entity) -> Result<(), StoreError> {
        let removed = self.with_state(|state| state.users.remove(user.id()));
        if removed.is_none() {
            return Err(StoreError::NotFound {
                kind: "user",
                id: user.id().clone(),
            });
        }
        tracing::debug!(id = %user.id(), "user deleted");
        Ok(())
    }

    async fn save_credential(&self, credential: &dyn Entity) -> Result<(), StoreError> {
        self.with_state(|state| {
            state
                .credentials
                .entry(credential.id().clone())
                .or_default()
                .apply(credential);
        });
        tracing::debug!(id = %credential.id(), "credential saved");
        Ok(())
    }

    async fn destroy_credential(&self, credential: &dyn Entity) -> Result<(), StoreError> {
        let removed = self.with_state(|state| state.credentials.remove(credential.id()));
        if removed.is_none() {
            return Err(StoreError::NotFound {
                kind: "credential",
                id: credential.id().clone(),
            });
        }
        tracing::debug!(id = %credential.id(), "credential destroyed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
