// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::credential::Credential;
use crate::record::Entity;
use crate::store::{Selector, Store, StoreError};
use async_trait::async_trait;
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any Store.
///
/// Results from the inner store are returned unchanged.
#[derive(Clone, Debug)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

fn log_outcome(result: &Result<(), StoreError>, started: Instant, done: &str) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(()) => tracing::info!(elapsed_ms, "{done}"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "{done} failed"),
    }
}

#[async_trait]
impl<S: Store> Store for TracedStore<S> {
    fn create_credential(&self) -> Credential<Self> {
        let credential = self.inner.create_credential().rebind(self.clone());
        tracing::debug!(id = %credential.id(), "credential created");
        credential
    }

    async fn find_credentials(
        &self,
        selector: &Selector,
    ) -> Result<Vec<Credential<Self>>, StoreError> {
        let span = tracing::info_span!("store.find_credentials", selector_len = selector.len());
        async {
            let started = Instant::now();
            let result = self.inner.find_credentials(selector).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match result {
                Ok(found) => {
                    tracing::info!(elapsed_ms, found = found.len(), "found");
                    Ok(found
                        .into_iter()
                        .map(|credential| credential.rebind(self.clone()))
                        .collect())
                }
                Err(e) => {
                    tracing::error!(elapsed_ms, error = %e, "find failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn save_user(&self, user: &dyn Entity) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.save_user", id = %user.id());
        async {
            tracing::debug!(pending = user.pending_changes().len(), "saving");
            let started = Instant::now();
            let result = self.inner.save_user(user).await;
            log_outcome(&result, started, "saved");
            result
        }
        .instrument(span)
        .await
    }

    async fn delete_user(&self, user: &dyn Entity) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.delete_user", id = %user.id());
        async {
            let started = Instant::now();
            let result = self.inner.delete_user(user).await;
            log_outcome(&result, started, "deleted");
            result
        }
        .instrument(span)
        .await
    }

    async fn save_credential(&self, credential: &dyn Entity) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.save_credential", id = %credential.id());
        async {
            tracing::debug!(pending = credential.pending_changes().len(), "saving");
            let started = Instant::now();
            let result = self.inner.save_credential(credential).await;
            log_outcome(&result, started, "saved");
            result
        }
        .instrument(span)
        .await
    }

    async fn destroy_credential(&self, credential: &dyn Entity) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.destroy_credential", id = %credential.id());
        async {
            let started = Instant::now();
            let result = self.inner.destroy_credential(credential).await;
            log_outcome(&result, started, "destroyed");
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
