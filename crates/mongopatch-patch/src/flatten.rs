// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattening of nested patches into dotted key paths.

use bson::{Bson, Document, doc};
use serde::Serialize;

use crate::shape::{ValueShape, classify};

/// A patch rewritten as `dotted.path -> terminal value`.
///
/// Entries keep the order in which flattening produced them (depth first,
/// patch key order). No value is ever an embedded document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlattenedPatch(Document);

impl FlattenedPatch {
    pub fn get(&self, path: &str) -> Option<&Bson> {
        self.0.get(path)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Bson)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The flattened entries as a plain document.
    pub fn into_document(self) -> Document {
        self.0
    }

    /// A `{ "$set": { ... } }` update document applying every entry.
    pub fn to_set_update(&self) -> Document {
        doc! { "$set": self.0.clone() }
    }

    /// Insert or overwrite an entry. An overwritten key keeps its position.
    fn put(&mut self, path: String, value: Bson) {
        debug_assert!(!matches!(value, Bson::Document(_)));
        self.0.insert(path, value);
    }
}

impl<'a> IntoIterator for &'a FlattenedPatch {
    type Item = (&'a String, &'a Bson);
    type IntoIter = bson::document::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Flatten `patch` into dotted key paths.
///
/// Embedded documents are descended into; arrays, dates and every other
/// value are kept whole. An empty embedded document contributes nothing.
///
/// ```
/// use bson::doc;
/// use mongopatch_patch::flatten;
///
/// let flat = flatten(&doc! { "cycle": { "length": 25 }, "name": "unit" });
/// assert_eq!(flat.into_document(), doc! { "cycle.length": 25, "name": "unit" });
/// ```
pub fn flatten(patch: &Document) -> FlattenedPatch {
    flatten_with_prefix(patch, "")
}

/// Flatten `patch`, prepending `prefix` to every emitted key.
///
/// The prefix is used verbatim, so callers nesting under `parent` pass
/// `"parent."`.
pub fn flatten_with_prefix(patch: &Document, prefix: &str) -> FlattenedPatch {
    let mut flattened = FlattenedPatch::default();
    flatten_into(&mut flattened, patch, prefix);
    flattened
}

fn flatten_into(out: &mut FlattenedPatch, patch: &Document, prefix: &str) {
    for (key, value) in patch {
        match classify(value) {
            ValueShape::Nested(nested) => {
                flatten_into(out, nested, &format!("{prefix}{key}."));
            }
            ValueShape::Terminal(terminal) => {
                out.put(format!("{prefix}{key}"), terminal.clone());
            }
        }
    }
}
