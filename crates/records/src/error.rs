// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for record operations

use crate::store::StoreError;
use fj_journal::JournalError;
use thiserror::Error;

/// Errors from record-level operations that touch both journal and store
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),
    /// Passed through from the store unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}
