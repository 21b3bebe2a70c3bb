//! User record specs
//!
//! Verify user lifecycle and credential lookups against a store.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test]
async fn committed_user_persists_current_view() {
    let store = MemoryStore::new();
    let user = family(store.clone());

    user.commit().await.unwrap();

    let stored = store.user_fields(&RecordId::new("user-1")).unwrap();
    let stored: Value = stored.into_iter().collect::<serde_json::Map<_, _>>().into();
    assert_eq!(
        stored,
        json!({
            "username": "sara",
            "child2": "miles",
            "const": true,
            "age": 40
        })
    );
}

#[tokio::test]
async fn destroyed_user_is_removed() {
    let store = MemoryStore::new();
    let user = family(store.clone());
    user.commit().await.unwrap();

    user.destroy().await.unwrap();

    assert_eq!(store.user_count(), 0);
    let err = user.destroy().await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn user_finds_its_credentials() {
    let store = MemoryStore::new();
    let mut adam = User::new(store.clone());
    adam.set_username("adam").unwrap();
    let mut sara = User::new(store.clone());
    sara.set_username("sara").unwrap();

    for owner in [&adam, &sara, &adam] {
        let credential = owner.create_credential().unwrap();
        credential.commit().await.unwrap();
    }

    assert_eq!(adam.credentials().await.unwrap().len(), 2);
    assert_eq!(sara.credentials().await.unwrap().len(), 1);
}

#[tokio::test]
async fn lookups_need_a_username() {
    let user = User::new(MemoryStore::new());

    let err = user.credentials().await.unwrap_err();
    assert!(matches!(
        err,
        RecordError::Journal(JournalError::FieldNotFound(_))
    ));
}

#[tokio::test]
async fn store_failures_reach_the_caller() {
    let store = FakeStore::new();
    store.fail_next(StoreError::Unavailable("maintenance".to_string()));
    let user = family(store.clone());

    let err = user.commit().await.unwrap_err();
    assert_eq!(err.to_string(), "store unavailable: maintenance");
    assert!(matches!(store.calls().as_slice(), [StoreCall::SaveUser { .. }]));
}
