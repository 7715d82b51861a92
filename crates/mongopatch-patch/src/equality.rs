// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity-style comparison between a stored value and a patch value.
//!
//! Primitive values compare by value. Structured values (arrays, embedded
//! documents, dates, ids, binaries and the other BSON object types) are
//! compared by identity, and a patch value is never the same instance as a
//! stored one, so they always compare unequal. A patch carrying an array
//! equal in content to the stored one still counts as a change.

use bson::Bson;

/// Whether `a` and `b` are the same value under identity semantics.
///
/// `None` and [`Bson::Undefined`] both stand for "no value" and are equal
/// to each other. Numbers compare numerically across `Int32`, `Int64` and
/// `Double`; `NaN` equals nothing.
pub fn strictly_equal(a: Option<&Bson>, b: Option<&Bson>) -> bool {
    match (defined(a), defined(b)) {
        (None, None) => true,
        (Some(a), Some(b)) => primitive_eq(a, b),
        _ => false,
    }
}

fn defined(value: Option<&Bson>) -> Option<&Bson> {
    value.filter(|v| !matches!(v, Bson::Undefined))
}

fn primitive_eq(a: &Bson, b: &Bson) -> bool {
    match (a, b) {
        (Bson::String(a), Bson::String(b)) => a == b,
        (Bson::Boolean(a), Bson::Boolean(b)) => a == b,
        (Bson::Null, Bson::Null) => true,
        _ => match (as_number(a), as_number(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

// Int64 values beyond 2^53 lose precision, matching a double based number model.
fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}
