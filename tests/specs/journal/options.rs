//! Projection option specs
//!
//! Verify malformed projection requests are rejected before the journal is read.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn uncompacted_mapping_is_rejected() {
    let journal = Journal::new();
    let err = journal
        .project(&ProjectOptions::all().uncompacted())
        .unwrap_err();

    assert!(matches!(err, JournalError::InvalidConfiguration(_)));
}

#[test]
fn mapping_request_for_ordered_pairs_is_rejected() {
    let journal = Journal::new();
    let options = ProjectOptions::all().with_shape(OutputShape::OrderedPairs);

    let err = journal.project_mapping(&options).unwrap_err();
    assert!(matches!(err, JournalError::InvalidConfiguration(_)));
}

#[test]
fn unknown_shape_is_unsupported() {
    let err = "array".parse::<OutputShape>().unwrap_err();
    assert_eq!(err, JournalError::UnsupportedOutputShape("array".to_string()));
}

#[test]
fn options_load_from_toml() {
    let options = ProjectOptions::from_toml(
        r#"
        include_init = false
        include_delete = false
        "#,
    )
    .unwrap();

    assert_eq!(options, ProjectOptions::only(&[OpKind::Set]));
}

#[test]
fn invalid_kind_selector_is_rejected() {
    let err = Operation::new("update", "username", Some(json!("sara"))).unwrap_err();
    assert!(matches!(err, JournalError::InvalidArgument { .. }));
}
