// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record capability traits
//!
//! `Entity` is the read-only view a store persists. `Record` adds the
//! journaled mutators and the lifecycle hooks every record variant must
//! implement against its store.

use crate::id::RecordId;
use crate::schema::Schema;
use crate::store::StoreError;
use async_trait::async_trait;
use fj_journal::{Journal, JournalError, ProjectOptions, Projection, ProjectionOutput};
use serde_json::Value;

/// State shared by every record variant: identity, journal and schema
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCore {
    id: RecordId,
    journal: Journal,
    schema: Option<Schema>,
}

impl RecordCore {
    pub fn new(id: RecordId) -> Self {
        Self::from_parts(id, Journal::new(), None)
    }

    pub fn from_parts(id: RecordId, journal: Journal, schema: Option<Schema>) -> Self {
        Self {
            id,
            journal,
            schema,
        }
    }
}

/// Read-only view of a record, as handed to a store
pub trait Entity: Send + Sync {
    fn core(&self) -> &RecordCore;

    fn id(&self) -> &RecordId {
        &self.core().id
    }

    fn journal(&self) -> &Journal {
        &self.core().journal
    }

    fn schema(&self) -> Option<&Schema> {
        self.core().schema.as_ref()
    }

    /// Current view of every touched field
    fn snapshot(&self) -> Projection {
        self.journal().snapshot()
    }

    /// Sets and deletes not yet superseded
    fn pending_changes(&self) -> Projection {
        self.journal().pending_changes()
    }
}

/// A journaled domain record bound to a store
#[async_trait]
pub trait Record: Entity {
    fn core_mut(&mut self) -> &mut RecordCore;

    /// Persist the record's current projection
    async fn commit(&self) -> Result<(), StoreError>;

    /// Remove the persisted record
    async fn destroy(&self) -> Result<(), StoreError>;

    fn init(&mut self, field: &str, value: impl Into<Value>) -> Result<(), JournalError> {
        self.core_mut().journal.record_init(field, value)
    }

    fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), JournalError> {
        self.core_mut().journal.record_set(field, value)
    }

    fn delete(&mut self, field: &str) -> Result<(), JournalError> {
        self.core_mut().journal.record_delete(field, None)
    }

    /// Delete carrying a payload, which projections and `get` report back
    fn delete_with(&mut self, field: &str, payload: Value) -> Result<(), JournalError> {
        self.core_mut().journal.record_delete(field, Some(payload))
    }

    /// Current value; a delete yields its payload, `None` if it had none
    fn get(&self, field: &str) -> Result<Option<&Value>, JournalError> {
        self.journal().current_value(field)
    }

    /// Current value of a field that must carry one
    fn require(&self, field: &str) -> Result<&Value, JournalError> {
        self.get(field)?
            .ok_or_else(|| JournalError::FieldNotFound(field.to_string()))
    }

    fn project(&self, options: &ProjectOptions) -> Result<ProjectionOutput, JournalError> {
        self.journal().project(options)
    }

    fn create_schema(&mut self, schema: Schema) {
        self.core_mut().schema = Some(schema);
    }
}
