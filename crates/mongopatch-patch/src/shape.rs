// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descend-or-stop classification of patch values.

use bson::{Bson, Document};

/// How [`flatten`](crate::flatten()) treats a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueShape<'a> {
    /// A nested mapping; flattening recurses into it.
    Nested(&'a Document),
    /// Anything else, arrays and dates included; emitted as-is.
    Terminal(&'a Bson),
}

/// Classify a value. Only embedded documents are nested.
pub fn classify(value: &Bson) -> ValueShape<'_> {
    match value {
        Bson::Document(nested) => ValueShape::Nested(nested),
        other => ValueShape::Terminal(other),
    }
}
