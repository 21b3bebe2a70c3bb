// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Projection options and outputs
//!
//! A projection turns the journal into a snapshot. Options are validated
//! eagerly, before the journal is scanned.

use crate::error::JournalError;
use crate::operation::{OpKind, Operation};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Shape of a projection result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum OutputShape {
    /// Field to value mapping
    #[default]
    #[serde(rename = "mapping")]
    Mapping,
    /// Surviving operations in log order
    #[serde(rename = "orderedPairs")]
    OrderedPairs,
}

impl OutputShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputShape::Mapping => "mapping",
            OutputShape::OrderedPairs => "orderedPairs",
        }
    }
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputShape {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mapping" => Ok(OutputShape::Mapping),
            "orderedPairs" | "ordered_pairs" => Ok(OutputShape::OrderedPairs),
            other => Err(JournalError::UnsupportedOutputShape(other.to_string())),
        }
    }
}

/// Options controlling `Journal::project`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectOptions")]
pub struct ProjectOptions {
    pub output_shape: OutputShape,
    /// Keep only the newest operation per field.
    /// May be false only for `OutputShape::OrderedPairs`.
    pub compact: bool,
    pub include_init: bool,
    pub include_set: bool,
    pub include_delete: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            output_shape: OutputShape::Mapping,
            compact: true,
            include_init: true,
            include_set: true,
            include_delete: true,
        }
    }
}

impl ProjectOptions {
    /// Compacted mapping of every kind
    pub fn all() -> Self {
        Self::default()
    }

    /// Compacted mapping restricted to exactly the given kinds
    pub fn only(kinds: &[OpKind]) -> Self {
        let mut options = Self::default();
        for kind in OpKind::ALL {
            options = options.include(kind, kinds.contains(&kind));
        }
        options
    }

    pub fn include(mut self, kind: OpKind, included: bool) -> Self {
        match kind {
            OpKind::Init => self.include_init = included,
            OpKind::Set => self.include_set = included,
            OpKind::Delete => self.include_delete = included,
        }
        self
    }

    pub fn with_shape(mut self, shape: OutputShape) -> Self {
        self.output_shape = shape;
        self
    }

    /// Request every matching operation rather than the newest per field
    pub fn uncompacted(mut self) -> Self {
        self.compact = false;
        self
    }

    pub fn includes(&self, kind: OpKind) -> bool {
        match kind {
            OpKind::Init => self.include_init,
            OpKind::Set => self.include_set,
            OpKind::Delete => self.include_delete,
        }
    }

    pub fn validate(&self) -> Result<(), JournalError> {
        if !self.compact && self.output_shape != OutputShape::OrderedPairs {
            return Err(JournalError::InvalidConfiguration(format!(
                "compact may only be false when output_shape is \"orderedPairs\", got \"{}\"",
                self.output_shape
            )));
        }
        Ok(())
    }

    /// Parse and validate options from a TOML table
    ///
    /// ```toml
    /// output_shape = "orderedPairs"
    /// compact = false
    /// include_init = false
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, JournalError> {
        let raw: RawProjectOptions =
            toml::from_str(text).map_err(|e| JournalError::Config(e.to_string()))?;
        Self::try_from(raw)
    }
}

fn default_true() -> bool {
    true
}

/// Unvalidated option table as it appears in config files
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProjectOptions {
    #[serde(default)]
    output_shape: Option<String>,
    #[serde(default = "default_true")]
    compact: bool,
    #[serde(default = "default_true")]
    include_init: bool,
    #[serde(default = "default_true")]
    include_set: bool,
    #[serde(default = "default_true")]
    include_delete: bool,
}

impl TryFrom<RawProjectOptions> for ProjectOptions {
    type Error = JournalError;

    fn try_from(raw: RawProjectOptions) -> Result<Self, Self::Error> {
        let output_shape = match raw.output_shape {
            Some(shape) => shape.parse()?,
            None => OutputShape::default(),
        };
        let options = ProjectOptions {
            output_shape,
            compact: raw.compact,
            include_init: raw.include_init,
            include_set: raw.include_set,
            include_delete: raw.include_delete,
        };
        options.validate()?;
        Ok(options)
    }
}

/// Compacted field to value snapshot.
///
/// Each field carries the value of its surviving operation. A surviving
/// delete carries its payload, `None` for a bare delete, and the field is
/// also marked deleted so it stays distinct from a stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    fields: BTreeMap<String, Option<Value>>,
    deleted: BTreeSet<String>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projected entry for a field: `None` if absent, `Some(None)` if its
    /// surviving operation carried no value
    pub fn get(&self, field: &str) -> Option<Option<&Value>> {
        self.fields.get(field).map(Option::as_ref)
    }

    /// Value carried for a field, including a delete payload
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_deleted(&self, field: &str) -> bool {
        self.deleted.contains(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Fields set or initialized to a value
    pub fn live_values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .filter(|(k, _)| !self.deleted.contains(k.as_str()))
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    /// Fields whose newest operation is a delete
    pub fn deleted_fields(&self) -> impl Iterator<Item = &str> {
        self.deleted.iter().map(String::as_str)
    }

    /// JSON object view; fields without a value render as `null`
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone().unwrap_or(Value::Null)))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.fields)
    }
}

/// Later operations for the same field replace earlier ones
impl<'a> FromIterator<&'a Operation> for Projection {
    fn from_iter<I: IntoIterator<Item = &'a Operation>>(iter: I) -> Self {
        let mut projection = Self::new();
        for op in iter {
            let field = op.field().to_string();
            if op.is_delete() {
                projection.deleted.insert(field.clone());
            } else {
                projection.deleted.remove(&field);
            }
            projection.fields.insert(field, op.value().cloned());
        }
        projection
    }
}

/// Result of `Journal::project`, shaped by `ProjectOptions::output_shape`
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionOutput {
    Mapping(Projection),
    OrderedPairs(Vec<Operation>),
}

impl ProjectionOutput {
    pub fn shape(&self) -> OutputShape {
        match self {
            ProjectionOutput::Mapping(_) => OutputShape::Mapping,
            ProjectionOutput::OrderedPairs(_) => OutputShape::OrderedPairs,
        }
    }

    pub fn into_mapping(self) -> Option<Projection> {
        match self {
            ProjectionOutput::Mapping(projection) => Some(projection),
            ProjectionOutput::OrderedPairs(_) => None,
        }
    }

    pub fn into_ordered_pairs(self) -> Option<Vec<Operation>> {
        match self {
            ProjectionOutput::Mapping(_) => None,
            ProjectionOutput::OrderedPairs(ops) => Some(ops),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ProjectionOutput::Mapping(projection) => projection.len(),
            ProjectionOutput::OrderedPairs(ops) => ops.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
