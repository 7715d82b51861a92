// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for patch flattening and diffing.

use bson::{Bson, Document};
use mongopatch_patch::{diff, flatten, resolve_path};
use proptest::prelude::*;

// Keys without dots, so every generated key is a single path segment.
fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn arb_primitive() -> impl Strategy<Value = Bson> {
    prop_oneof![
        Just(Bson::Null),
        any::<bool>().prop_map(Bson::Boolean),
        any::<i32>().prop_map(Bson::Int32),
        any::<i64>().prop_map(Bson::Int64),
        "[ -~]{0,12}".prop_map(Bson::String),
    ]
}

fn arb_terminal() -> impl Strategy<Value = Bson> {
    prop_oneof![
        4 => arb_primitive(),
        1 => prop::collection::vec(arb_primitive(), 0..4).prop_map(Bson::Array),
        1 => any::<i64>().prop_map(|ms| Bson::DateTime(bson::DateTime::from_millis(ms))),
    ]
}

fn arb_flat_document() -> impl Strategy<Value = Document> {
    prop::collection::vec((arb_key(), arb_terminal()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_nested_document() -> impl Strategy<Value = Document> {
    arb_flat_document().prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec(
            (arb_key(), prop_oneof![arb_terminal(), inner.prop_map(Bson::Document)]),
            0..4,
        )
        .prop_map(|entries| entries.into_iter().collect())
    })
}

fn arb_primitive_document() -> impl Strategy<Value = Document> {
    prop::collection::vec((arb_key(), arb_primitive()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    /// Property: flattening a patch without nested documents returns it unchanged.
    #[test]
    fn prop_flat_patch_round_trips(patch in arb_flat_document()) {
        prop_assert_eq!(flatten(&patch).into_document(), patch);
    }

    /// Property: no flattened value is an embedded document.
    #[test]
    fn prop_flattened_values_are_terminal(patch in arb_nested_document()) {
        let flat = flatten(&patch);
        for (_, value) in &flat {
            prop_assert!(!matches!(value, Bson::Document(_)));
        }
    }

    /// Property: every flattened path resolves back to its value in the patch.
    #[test]
    fn prop_flattened_paths_resolve_in_patch(patch in arb_nested_document()) {
        let flat = flatten(&patch);
        for (path, value) in &flat {
            prop_assert_eq!(resolve_path(&patch, path), Some(value));
        }
    }

    /// Property: patching a document with its own primitive values changes nothing.
    #[test]
    fn prop_self_patch_has_no_changes(doc in arb_primitive_document()) {
        prop_assert!(diff(&doc, &doc).is_empty());
    }

    /// Property: against an empty document every flattened entry is a change.
    #[test]
    fn prop_empty_document_changes_every_path(patch in arb_nested_document()) {
        let flat = flatten(&patch);
        let changes = diff(&Document::new(), &patch);
        prop_assert_eq!(changes.len(), flat.len());
        for (change, (path, value)) in changes.iter().zip(&flat) {
            prop_assert_eq!(&change.field, path);
            prop_assert_eq!(&change.to, value);
            prop_assert!(change.from.is_none());
        }
    }
}
