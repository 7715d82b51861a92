// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field-level change detection between a document and a patch.

use bson::{Bson, Document};
use serde::Serialize;
use tracing::trace;

use crate::equality::strictly_equal;
use crate::flatten::{FlattenedPatch, flatten};
use crate::resolve::resolve_path;

/// One field a patch would change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    /// Dotted key path of the field.
    pub field: String,
    /// Current value in the document; `None` when the path is absent.
    pub from: Option<Bson>,
    /// Value the patch assigns.
    pub to: Bson,
}

/// Whether applying `patch` would change `field` of `doc`.
///
/// `field` is a dotted key path such as `cycle.length`. Fields the patch
/// does not touch are never changing.
pub fn field_is_changing(doc: &Document, field: &str, patch: &Document) -> bool {
    changes_field(doc, field, &flatten(patch))
}

/// The changes `patch` makes to `doc`, in flattened patch order.
///
/// Patching a document with its current values yields no changes.
pub fn diff(doc: &Document, patch: &Document) -> Vec<Change> {
    let flattened = flatten(patch);
    let changes: Vec<Change> = flattened
        .iter()
        .filter(|(field, _)| changes_field(doc, field, &flattened))
        .map(|(field, to)| Change {
            field: field.clone(),
            from: resolve_path(doc, field).cloned(),
            to: to.clone(),
        })
        .collect();

    trace!(
        patched = flattened.len(),
        changed = changes.len(),
        "computed patch diff"
    );
    changes
}

fn changes_field(doc: &Document, field: &str, flattened: &FlattenedPatch) -> bool {
    match flattened.get(field) {
        Some(to) => !strictly_equal(resolve_path(doc, field), Some(to)),
        None => false,
    }
}
