// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn insert_deduplicates() {
    let mut set = ChangeSet::new();
    assert!(set.insert("src/a.rs"));
    assert!(!set.insert("src/a.rs"));
    assert_eq!(set.len(), 1);
}

#[test]
fn merge_is_union() {
    let mut set: ChangeSet = ["a", "b"].into_iter().collect();
    set.merge(["b", "c"].into_iter().collect());

    let ids: Vec<&str> = set.iter().collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn merge_into_empty_takes_other() {
    let mut set = ChangeSet::new();
    set.merge(["x"].into_iter().collect());
    assert!(set.contains("x"));
}

#[test]
fn display_lists_sorted_ids() {
    let set: ChangeSet = ["z.js", "a.js"].into_iter().collect();
    assert_eq!(set.to_string(), "[a.js, z.js]");
}

#[test]
fn serializes_as_plain_list() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        ids: ChangeSet,
    }

    let parsed: Wrapper = toml::from_str(r#"ids = ["b", "a", "b"]"#).unwrap();
    assert_eq!(parsed.ids.len(), 2);
    assert!(parsed.ids.contains("a"));
}

proptest! {
    #[test]
    fn merge_contains_every_id_from_both_sides(
        left in proptest::collection::vec("[a-e]{1,3}", 0..10),
        right in proptest::collection::vec("[a-e]{1,3}", 0..10),
    ) {
        let mut set: ChangeSet = left.iter().cloned().collect();
        set.merge(right.iter().cloned().collect());

        for id in left.iter().chain(right.iter()) {
            prop_assert!(set.contains(id));
        }
        prop_assert!(set.len() <= left.len() + right.len());
    }
}
