// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{matches_selector, Selector, Store, StoreError};
use crate::credential::Credential;
use crate::id::RecordId;
use crate::record::Entity;
use async_trait::async_trait;
use fj_journal::Projection;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Recorded store call
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    CreateCredential { id: RecordId },
    FindCredentials { selector: Selector },
    SaveUser { id: RecordId, snapshot: Projection },
    DeleteUser { id: RecordId },
    SaveCredential { id: RecordId, snapshot: Projection },
    DestroyCredential { id: RecordId },
}

/// Fake store for testing
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    credentials: Arc<Mutex<Vec<(RecordId, BTreeMap<String, Value>)>>>,
    next_error: Arc<Mutex<Option<StoreError>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Seed a credential returned by `find_credentials` when it matches
    pub fn add_credential(
        &self,
        id: impl Into<RecordId>,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        self.credentials
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id.into(), fields.into_iter().collect()));
    }

    /// Make the next fallible call return `error`
    pub fn fail_next(&self, error: StoreError) {
        *self.next_error.lock().unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
        match self.next_error.lock().unwrap_or_else(|e| e.into_inner()).take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Store for FakeStore {
    fn create_credential(&self) -> Credential<Self> {
        let credential = Credential::new(self.clone());
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(StoreCall::CreateCredential {
                id: credential.id().clone(),
            });
        credential
    }

    async fn find_credentials(
        &self,
        selector: &Selector,
    ) -> Result<Vec<Credential<Self>>, StoreError> {
        self.record(StoreCall::FindCredentials {
            selector: selector.clone(),
        })?;

        let seeded = self.credentials.lock().unwrap_or_else(|e| e.into_inner()).clone();
        seeded
            .into_iter()
            .filter(|(_, fields)| matches_selector(fields, selector))
            .map(|(id, fields)| {
                Credential::from_fields(self.clone(), id, fields)
                    .map_err(|e| StoreError::Rejected(e.to_string()))
            })
            .collect()
    }

    async fn save_user(&self, user: &dyn Entity) -> Result<(), StoreError> {
        self.record(StoreCall::SaveUser {
            id: user.id().clone(),
            snapshot: user.snapshot(),
        })
    }

    async fn delete_user(&self, user: &dyn Entity) -> Result<(), StoreError> {
        self.record(StoreCall::DeleteUser {
            id: user.id().clone(),
        })
    }

    async fn save_credential(&self, credential: &dyn Entity) -> Result<(), StoreError> {
        self.record(StoreCall::SaveCredential {
            id: credential.id().clone(),
            snapshot: credential.snapshot(),
        })
    }

    async fn destroy_credential(&self, credential: &dyn Entity) -> Result<(), StoreError> {
        self.record(StoreCall::DestroyCredential {
            id: credential.id().clone(),
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
