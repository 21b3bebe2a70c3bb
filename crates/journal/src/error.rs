// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for journal operations

use thiserror::Error;

/// Errors raised synchronously by the journal.
///
/// These are usage errors, never transient failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
    #[error("field not found: {0}")]
    FieldNotFound(String),
    #[error("unsupported output shape: {0}")]
    UnsupportedOutputShape(String),
    #[error("invalid projection configuration: {0}")]
    InvalidConfiguration(String),
    #[error("config parse error: {0}")]
    Config(String),
}

impl JournalError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
