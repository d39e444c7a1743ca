//! Query algebra against a prepared database

use crate::common::*;
use std::sync::Arc;
use ucdb::{
    and_of, not_of, or_of, sub_of, BinaryProperty, Database, DatabaseConfig, GeneralCategory,
    OfflineTransport, Query,
};

use BinaryProperty::{Emoji, Emoji_Component, Extended_Pictographic};

#[test]
fn test_difference_matches_explicit_sets() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_1);

    let query = sub_of([
        and_of([Query::from(Emoji), Query::from(Extended_Pictographic)]),
        Query::from(Emoji_Component),
    ]);
    let expected = db
        .materialize(Emoji)
        .unwrap()
        .intersection(&db.materialize(Extended_Pictographic).unwrap())
        .difference(&db.materialize(Emoji_Component).unwrap());

    let set = query.materialize(&db).unwrap();
    assert_eq!(set, expected);
    assert_eq!(set.len(), 2);
    assert!(set.contains(cp(0x231A)));
    assert_eq!(query.simplify().materialize(&db).unwrap(), expected);
}

#[test]
fn test_complex_predicates() {
    let dir = fixture_mirror();
    let db = database(dir.path(), V15_1);

    let letters_and_punctuation = Query::from(GeneralCategory::Uppercase_Letter)
        | GeneralCategory::Other_Punctuation;
    assert_eq!(letters_and_punctuation.materialize(&db).unwrap().len(), 26 + 3);

    let assigned = not_of(GeneralCategory::Unassigned);
    let unassigned = db.count(GeneralCategory::Unassigned).unwrap();
    assert_eq!(assigned.materialize(&db).unwrap().len(), 0x110000 - unassigned);
}

#[test]
fn test_simplified_query_display() {
    let query = or_of([
        not_of(not_of(Emoji)),
        Query::Void,
        and_of([Query::from(Extended_Pictographic), Query::Universe]),
    ]);
    assert_eq!(query.simplify().to_string(), "Emoji | Extended_Pictographic");
}

#[test]
fn test_materialize_against_shared_database() {
    let dir = fixture_mirror();
    let config = DatabaseConfig {
        version: Some(V15_1.to_string()),
        ..DatabaseConfig::with_root(dir.path())
    };
    let db: Arc<Database> =
        Database::shared_with_transport(config, Arc::new(OfflineTransport)).unwrap();

    let set = Query::from(Extended_Pictographic).materialize(&db).unwrap();
    assert_eq!(set.len(), 2 + 0x900);
    assert!(db.is_optimized());
}
