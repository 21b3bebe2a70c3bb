//! Journal projection specs
//!
//! Verify compaction and kind filtering over a record's journal.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn init_then_set_projects_latest_value() {
    let mut journal = Journal::new();
    journal.record_init("username", "adam").unwrap();
    journal.record_set("username", "sara").unwrap();

    assert_eq!(journal.snapshot().to_json(), json!({"username": "sara"}));
}

#[test]
fn updates_only() {
    let user = family(MemoryStore::new());
    let projection = mapping(&user, ProjectOptions::only(&[OpKind::Set]));

    assert_eq!(
        projection.to_json(),
        json!({"username": "sara", "child2": "miles", "age": 40})
    );
}

#[test]
fn deletes_only() {
    let user = family(MemoryStore::new());
    let projection = mapping(&user, ProjectOptions::only(&[OpKind::Delete]));

    assert_eq!(projection.to_json(), json!({"beer": null, "child1": null}));
    assert!(projection.is_deleted("beer"));
    assert!(projection.is_deleted("child1"));
}

#[test]
fn initial_values_only() {
    let user = family(MemoryStore::new());
    let projection = mapping(&user, ProjectOptions::only(&[OpKind::Init]));

    assert_eq!(projection.to_json(), json!({"const": true}));
}

#[test]
fn updates_and_deletes() {
    let user = family(MemoryStore::new());
    let projection = mapping(&user, ProjectOptions::only(&[OpKind::Set, OpKind::Delete]));

    assert_eq!(
        projection.to_json(),
        json!({
            "username": "sara",
            "child2": "miles",
            "age": 40,
            "beer": null,
            "child1": null
        })
    );
    assert_eq!(projection, user.pending_changes());
}

#[test]
fn deleted_init_is_only_visible_as_delete() {
    let mut journal = Journal::new();
    journal.record_init("child1", "julia").unwrap();
    journal.record_delete("child1", None).unwrap();

    let deletes = journal
        .project_mapping(&ProjectOptions::only(&[OpKind::Delete]))
        .unwrap();
    assert_eq!(deletes.get("child1"), Some(None));

    let inits = journal
        .project_mapping(&ProjectOptions::only(&[OpKind::Init]))
        .unwrap();
    assert!(inits.is_empty());
}

#[test]
fn delete_projects_the_payload_it_was_given() {
    let mut journal = Journal::new();
    journal.record_init("child1", "julia").unwrap();
    journal.record_delete("child1", Some(json!("tombstone"))).unwrap();

    let deletes = journal
        .project_mapping(&ProjectOptions::only(&[OpKind::Delete]))
        .unwrap();
    assert_eq!(deletes.to_json(), json!({"child1": "tombstone"}));
    assert_eq!(
        journal.current_value("child1").unwrap(),
        Some(&json!("tombstone"))
    );
}

#[test]
fn lone_init_depends_on_init_flag() {
    let mut journal = Journal::new();
    journal.record_init("beer", true).unwrap();

    let included = journal
        .project_mapping(&ProjectOptions::only(&[OpKind::Init]))
        .unwrap();
    assert_eq!(included.to_json(), json!({"beer": true}));

    let excluded = journal
        .project_mapping(&ProjectOptions::all().include(OpKind::Init, false))
        .unwrap();
    assert!(excluded.is_empty());
}

#[test]
fn set_without_init_is_readable() {
    let mut journal = Journal::new();
    journal.record_set("age", 40).unwrap();

    assert_eq!(journal.current_value("age").unwrap(), Some(&json!(40)));
    assert_eq!(
        journal.current_value("missing").unwrap_err(),
        JournalError::FieldNotFound("missing".to_string())
    );
}

#[test]
fn current_value_matches_full_projection() {
    let user = family(MemoryStore::new());
    let snapshot = user.snapshot();

    assert_eq!(snapshot.len(), 6);
    for (field, value) in snapshot.iter() {
        assert_eq!(user.get(field).unwrap(), value);
    }
}

#[test]
fn projecting_twice_is_stable() {
    let user = family(MemoryStore::new());
    let options = ProjectOptions::only(&[OpKind::Set, OpKind::Init]);

    assert_eq!(mapping(&user, options), mapping(&user, options));
}

#[test]
fn ordered_pairs_list_surviving_operations() {
    let user = family(MemoryStore::new());
    let options = ProjectOptions::only(&[OpKind::Delete]).with_shape(OutputShape::OrderedPairs);

    let ops = match user.project(&options).unwrap() {
        ProjectionOutput::OrderedPairs(ops) => ops,
        other => panic!("expected ordered pairs, got {other:?}"),
    };
    let fields: Vec<&str> = ops.iter().map(Operation::field).collect();
    assert_eq!(fields, vec!["child1", "beer"]);
}

#[test]
fn uncompacted_history_keeps_every_entry() {
    let user = family(MemoryStore::new());
    let options = ProjectOptions::all()
        .with_shape(OutputShape::OrderedPairs)
        .uncompacted();

    let ops = user.project(&options).unwrap().into_ordered_pairs().unwrap();
    assert_eq!(ops.as_slice(), user.journal().entries());
}
