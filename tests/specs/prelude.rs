//! Shared helpers for specs

pub use fj_journal::{
    Journal, JournalError, OpKind, Operation, OutputShape, ProjectOptions, Projection,
    ProjectionOutput,
};
pub use fj_records::{
    Credential, Entity, FakeStore, MemoryStore, Record, RecordError, RecordId, Selector, Store,
    StoreCall, StoreError, User,
};
pub use serde_json::{json, Value};
pub use similar_asserts::assert_eq;

/// User journal covering every kind transition
///
/// username: init then set; child1: init then delete; child2: init, delete,
/// set; beer: init then delete; const: init only; age: set only.
pub fn family<S: Store>(store: S) -> User<S> {
    let mut user = User::with_id(store, RecordId::new("user-1"));
    user.init("username", "adam").unwrap();
    user.init("child1", "julia").unwrap();
    user.init("child2", "nobody").unwrap();
    user.init("beer", true).unwrap();
    user.init("const", true).unwrap();
    user.set("username", "sara").unwrap();
    user.delete("child1").unwrap();
    user.delete("child2").unwrap();
    user.set("child2", "miles").unwrap();
    user.set("age", 40).unwrap();
    user.delete("beer").unwrap();
    user
}

/// Mapping projection that must succeed
pub fn mapping<R: Record>(record: &R, options: ProjectOptions) -> Projection {
    record
        .project(&options)
        .unwrap()
        .into_mapping()
        .expect("mapping output")
}
