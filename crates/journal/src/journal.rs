// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only operation journal for one record
//!
//! The journal never edits or reorders entries. The newest entry for a field
//! decides that field's current value and kind; older entries are discarded
//! by compaction when a projection is built, not from the log itself.

use crate::error::JournalError;
use crate::operation::{OpKind, Operation};
use crate::projection::{OutputShape, ProjectOptions, Projection, ProjectionOutput};
use serde_json::Value;
use std::collections::HashSet;

/// Size summary of a journal and what compaction would discard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JournalStats {
    pub total_operations: usize,
    pub distinct_fields: usize,
    /// Entries shadowed by a newer entry for the same field
    pub compactable_operations: usize,
}

/// Ordered log of operations for a single record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    entries: Vec<Operation>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already built operation
    pub fn append(&mut self, op: Operation) {
        tracing::trace!(
            kind = %op.kind(),
            field = op.field(),
            len = self.entries.len() + 1,
            "journal append"
        );
        self.entries.push(op);
    }

    pub fn record_init(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), JournalError> {
        self.append(Operation::init(field, value)?);
        Ok(())
    }

    pub fn record_set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), JournalError> {
        self.append(Operation::set(field, value)?);
        Ok(())
    }

    /// Append a delete. A payload, if given, is what projections emit for it.
    pub fn record_delete(
        &mut self,
        field: impl Into<String>,
        payload: Option<Value>,
    ) -> Result<(), JournalError> {
        self.append(Operation::delete(field, payload)?);
        Ok(())
    }

    fn latest(&self, field: &str) -> Option<&Operation> {
        self.entries.iter().rev().find(|op| op.field() == field)
    }

    /// Value of the newest operation for `field`.
    ///
    /// A delete yields its payload, so `Ok(None)` for a bare delete.
    /// `FieldNotFound` when the field has never been touched.
    pub fn current_value(&self, field: &str) -> Result<Option<&Value>, JournalError> {
        self.latest(field)
            .map(Operation::value)
            .ok_or_else(|| JournalError::FieldNotFound(field.to_string()))
    }

    /// Kind of the newest operation for `field`
    pub fn current_kind(&self, field: &str) -> Result<OpKind, JournalError> {
        self.latest(field)
            .map(Operation::kind)
            .ok_or_else(|| JournalError::FieldNotFound(field.to_string()))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.latest(field).is_some()
    }

    pub fn entries(&self) -> &[Operation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct fields in the order they were first touched
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(Operation::field)
            .filter(|field| seen.insert(*field))
            .collect()
    }

    /// Newest operation per field, in ascending log order
    fn compacted(&self) -> Vec<&Operation> {
        let mut seen = HashSet::new();
        let mut survivors: Vec<&Operation> = self
            .entries
            .iter()
            .rev()
            .filter(|op| seen.insert(op.field()))
            .collect();
        survivors.reverse();
        survivors
    }

    /// Compact, filter and materialize the journal
    pub fn project(&self, options: &ProjectOptions) -> Result<ProjectionOutput, JournalError> {
        options.validate()?;

        let candidates: Vec<&Operation> = if options.compact {
            self.compacted()
        } else {
            self.entries.iter().collect()
        };
        let survivors = candidates
            .into_iter()
            .filter(|op| options.includes(op.kind()));

        let output = match options.output_shape {
            OutputShape::Mapping => ProjectionOutput::Mapping(survivors.collect()),
            OutputShape::OrderedPairs => {
                ProjectionOutput::OrderedPairs(survivors.cloned().collect())
            }
        };

        tracing::debug!(
            shape = %options.output_shape,
            compact = options.compact,
            entries = self.entries.len(),
            survivors = output.len(),
            "journal projected"
        );
        Ok(output)
    }

    /// Project into a mapping; an ordered-pairs request is a configuration error
    pub fn project_mapping(&self, options: &ProjectOptions) -> Result<Projection, JournalError> {
        if options.output_shape != OutputShape::Mapping {
            return Err(JournalError::InvalidConfiguration(format!(
                "mapping output requested with output_shape \"{}\"",
                options.output_shape
            )));
        }
        match self.project(options)? {
            ProjectionOutput::Mapping(projection) => Ok(projection),
            ProjectionOutput::OrderedPairs(_) => Err(JournalError::InvalidConfiguration(
                "mapping output expected".to_string(),
            )),
        }
    }

    /// Current view of every touched field
    pub fn snapshot(&self) -> Projection {
        self.mapping_of(ProjectOptions::all())
    }

    /// Updates and deletes not yet superseded, excluding initial values
    pub fn pending_changes(&self) -> Projection {
        self.mapping_of(ProjectOptions::only(&[OpKind::Set, OpKind::Delete]))
    }

    // Compacted mappings never fail validation.
    fn mapping_of(&self, options: ProjectOptions) -> Projection {
        self.compacted()
            .into_iter()
            .filter(|op| options.includes(op.kind()))
            .collect()
    }

    pub fn stats(&self) -> JournalStats {
        let distinct_fields = self.fields().len();
        JournalStats {
            total_operations: self.entries.len(),
            distinct_fields,
            compactable_operations: self.entries.len() - distinct_fields,
        }
    }
}

impl Extend<Operation> for Journal {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        for op in iter {
            self.append(op);
        }
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
