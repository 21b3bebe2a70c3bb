// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations recorded in a journal

use crate::error::JournalError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Kind of mutation an operation applies to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Initial value, typically loaded from a store
    Init,
    /// Update of a field value
    Set,
    /// Removal of a field
    Delete,
}

impl OpKind {
    pub const ALL: [OpKind; 3] = [OpKind::Init, OpKind::Set, OpKind::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Init => "init",
            OpKind::Set => "set",
            OpKind::Delete => "delete",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpKind {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(OpKind::Init),
            "set" => Ok(OpKind::Set),
            "delete" => Ok(OpKind::Delete),
            other => Err(JournalError::invalid_argument(
                "kind",
                format!("expected one of init, set, delete; got `{other}`"),
            )),
        }
    }
}

/// One immutable journal entry: kind, field name and value.
///
/// For `Delete` the value is an optional payload that is carried along but
/// never surfaces in projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOperation")]
pub struct Operation {
    kind: OpKind,
    field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl Operation {
    /// Build an operation from a textual kind selector
    pub fn new(
        kind: &str,
        field: impl Into<String>,
        value: Option<Value>,
    ) -> Result<Self, JournalError> {
        Self::with_kind(kind.parse()?, field, value)
    }

    pub fn init(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, JournalError> {
        Self::with_kind(OpKind::Init, field, Some(value.into()))
    }

    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, JournalError> {
        Self::with_kind(OpKind::Set, field, Some(value.into()))
    }

    pub fn delete(field: impl Into<String>, payload: Option<Value>) -> Result<Self, JournalError> {
        Self::with_kind(OpKind::Delete, field, payload)
    }

    pub fn with_kind(
        kind: OpKind,
        field: impl Into<String>,
        value: Option<Value>,
    ) -> Result<Self, JournalError> {
        let field = field.into();
        if field.is_empty() {
            return Err(JournalError::invalid_argument(
                "field",
                "field name must not be empty",
            ));
        }
        Ok(Self { kind, field, value })
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Value as recorded; for a delete, the payload if one was given
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_delete(&self) -> bool {
        self.kind == OpKind::Delete
    }
}

/// Unvalidated wire form, checked on deserialization
#[derive(Deserialize)]
struct RawOperation {
    kind: OpKind,
    field: String,
    #[serde(default)]
    value: Option<Value>,
}

impl TryFrom<RawOperation> for Operation {
    type Error = JournalError;

    fn try_from(raw: RawOperation) -> Result<Self, Self::Error> {
        Operation::with_kind(raw.kind, raw.field, raw.value)
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
