//! Credential record specs
//!
//! Verify credentials delegate their lifecycle to the store.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test]
async fn credential_can_be_committed() {
    let store = FakeStore::new();
    let credential = Credential::new(store.clone());

    credential.commit().await.unwrap();

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], StoreCall::SaveCredential { .. }));
}

#[tokio::test]
async fn credential_can_be_destroyed() {
    let store = FakeStore::new();
    let credential = Credential::new(store.clone());

    credential.destroy().await.unwrap();

    assert_eq!(
        store.calls(),
        vec![StoreCall::DestroyCredential {
            id: credential.id().clone()
        }]
    );
}

#[tokio::test]
async fn loaded_credential_tracks_pending_updates() {
    let store = MemoryStore::new();
    let mut credential = store.create_credential();
    credential.set("username", "adam").unwrap();
    credential.set("type", "password").unwrap();
    credential.commit().await.unwrap();

    let mut selector = Selector::new();
    selector.insert("username".to_string(), json!("adam"));
    let mut loaded = store.find_credentials(&selector).await.unwrap();
    assert_eq!(loaded.len(), 1);
    let loaded = &mut loaded[0];
    assert!(loaded.pending_changes().is_empty());

    loaded.set("type", "fido2").unwrap();
    loaded.delete("username").unwrap();
    assert_eq!(
        loaded.pending_changes().to_json(),
        json!({"type": "fido2", "username": null})
    );

    loaded.commit().await.unwrap();
    let stored = store.credential_fields(loaded.id()).unwrap();
    assert_eq!(stored.get("type"), Some(&json!("fido2")));
    assert!(!stored.contains_key("username"));
}
