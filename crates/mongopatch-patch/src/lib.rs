// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Patch translation for document updates.
//!
//! A patch is a possibly nested BSON document describing a partial update.
//! [`flatten`] rewrites it into dotted key paths (`{cycle: {length: 25}}`
//! becomes `{"cycle.length": 25}`), which is the shape a `$set` update
//! expects. [`diff`] reports which of those paths would actually change a
//! given document.
//!
//! All functions here are pure and synchronous.

pub mod diff;
pub mod equality;
pub mod flatten;
pub mod resolve;
pub mod shape;

pub use diff::{Change, diff, field_is_changing};
pub use equality::strictly_equal;
pub use flatten::{FlattenedPatch, flatten, flatten_with_prefix};
pub use resolve::resolve_path;
pub use shape::{ValueShape, classify};
