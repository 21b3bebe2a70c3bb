// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a record within a store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let id1 = RecordId::generate();
        let id2 = RecordId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 36);
    }

    #[test]
    fn record_id_from_str_keeps_text() {
        assert_eq!(RecordId::from("cred-1"), RecordId::new("cred-1"));
        assert_eq!(RecordId::from("cred-1").as_str(), "cred-1");
    }

    #[test]
    fn record_id_serializes_as_plain_string() {
        let id = RecordId::new("user-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""user-7""#);
        assert_eq!(id.to_string(), "user-7");
    }
}
