// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User record

use crate::credential::Credential;
use crate::error::RecordError;
use crate::id::RecordId;
use crate::record::{Entity, Record, RecordCore};
use crate::store::{Selector, Store, StoreError};
use async_trait::async_trait;
use fj_journal::JournalError;
use serde_json::Value;

const USERNAME: &str = "username";

/// Journaled user bound to a store
#[derive(Debug, Clone)]
pub struct User<S> {
    core: RecordCore,
    store: S,
}

impl<S: Store> User<S> {
    pub fn new(store: S) -> Self {
        Self::with_id(store, RecordId::generate())
    }

    pub fn with_id(store: S, id: RecordId) -> Self {
        Self {
            core: RecordCore::new(id),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), JournalError> {
        self.set(USERNAME, username.into())
    }

    /// Current username; a missing or bare-deleted username is `FieldNotFound`
    pub fn username(&self) -> Result<&Value, JournalError> {
        self.require(USERNAME)
    }

    /// New credential from the store, tagged with this user's username
    pub fn create_credential(&self) -> Result<Credential<S>, RecordError> {
        let username = self.username()?.clone();
        let mut credential = self.store.create_credential();
        credential.set(USERNAME, username)?;
        Ok(credential)
    }

    /// All stored credentials carrying this user's username
    pub async fn credentials(&self) -> Result<Vec<Credential<S>>, RecordError> {
        let mut selector = Selector::new();
        selector.insert(USERNAME.to_string(), self.username()?.clone());
        Ok(self.store.find_credentials(&selector).await?)
    }
}

impl<S: Store> Entity for User<S> {
    fn core(&self) -> &RecordCore {
        &self.core
    }
}

#[async_trait]
impl<S: Store> Record for User<S> {
    fn core_mut(&mut self) -> &mut RecordCore {
        &mut self.core
    }

    async fn commit(&self) -> Result<(), StoreError> {
        tracing::debug!(
            id = %self.id(),
            pending = self.pending_changes().len(),
            "committing user"
        );
        self.store.save_user(self).await
    }

    async fn destroy(&self) -> Result<(), StoreError> {
        tracing::debug!(id = %self.id(), "destroying user");
        self.store.delete_user(self).await
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
