// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op store for when persistence is disabled.

use super::{Selector, Store, StoreError};
use crate::credential::Credential;
use crate::record::Entity;
use async_trait::async_trait;

/// Store that accepts every write and finds nothing.
///
/// Used when records are only inspected in memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpStore;

impl NoOpStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Store for NoOpStore {
    async fn find_credentials(
        &self,
        _selector: &Selector,
    ) -> Result<Vec<Credential<Self>>, StoreError> {
        Ok(Vec::new())
    }

    async fn save_user(&self, _user: &dyn Entity) -> Result<(), StoreError> {
        Ok(())
    }

    async fn delete_user(&self, _user: &dyn Entity) -> Result<(), StoreError> {
        Ok(())
    }

    async fn save_credential(&self, _credential: &dyn Entity) -> Result<(), StoreError> {
        Ok(())
    }

    async fn destroy_credential(&self, _credential: &dyn Entity) -> Result<(), StoreError> {
        Ok(())
    }
}
