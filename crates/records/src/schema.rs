// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque schema metadata attached to a record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema declaration supplied by the surrounding application.
///
/// Records carry it for the store's benefit and never interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Value);

impl Schema {
    pub fn new(definition: impl Into<Value>) -> Self {
        Self(definition.into())
    }

    pub fn definition(&self) -> &Value {
        &self.0
    }

    pub fn into_definition(self) -> Value {
        self.0
    }
}
