// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key path lookup.

use bson::{Bson, Document};

/// The value stored at `path` inside `doc`, e.g. `cycle.length`.
///
/// Each dot separated segment selects a key of an embedded document, or a
/// decimal index of an array. Returns `None` as soon as a segment is absent
/// or the value reached so far cannot be indexed.
pub fn resolve_path<'a>(doc: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    segments.try_fold(doc.get(first)?, step)
}

fn step<'a>(cursor: &'a Bson, segment: &str) -> Option<&'a Bson> {
    match cursor {
        Bson::Document(nested) => nested.get(segment),
        Bson::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn resolves_nested_key() {
        let doc = doc! { "foo": { "bar": "baz" } };
        assert_eq!(resolve_path(&doc, "foo.bar"), Some(&Bson::String("baz".into())));
    }

    #[test]
    fn resolves_top_level_key() {
        let doc = doc! { "alpha": 3 };
        assert_eq!(resolve_path(&doc, "alpha"), Some(&Bson::Int32(3)));
    }

    #[test]
    fn missing_intermediate_yields_none() {
        assert_eq!(resolve_path(&Document::new(), "missing.path"), None);
        assert_eq!(resolve_path(&doc! { "a": {} }, "a.b.c"), None);
    }

    #[test]
    fn scalar_intermediate_yields_none() {
        let doc = doc! { "a": 1, "s": "text" };
        assert_eq!(resolve_path(&doc, "a.b"), None);
        assert_eq!(resolve_path(&doc, "s.length"), None);
    }

    #[test]
    fn array_segments_are_indices() {
        let doc = doc! { "days": [{ "n": 1 }, { "n": 2 }] };
        assert_eq!(resolve_path(&doc, "days.1.n"), Some(&Bson::Int32(2)));
        assert_eq!(resolve_path(&doc, "days.5.n"), None);
        assert_eq!(resolve_path(&doc, "days.first"), None);
    }

    #[test]
    fn null_leaf_is_present() {
        let doc = doc! { "a": { "b": null } };
        assert_eq!(resolve_path(&doc, "a.b"), Some(&Bson::Null));
        assert_eq!(resolve_path(&doc, "a.b.c"), None);
    }

    #[test]
    fn subdocument_is_returned_whole() {
        let doc = doc! { "a": { "b": 1 } };
        assert_eq!(
            resolve_path(&doc, "a"),
            Some(&Bson::Document(doc! { "b": 1 }))
        );
    }
}
