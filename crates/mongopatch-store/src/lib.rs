// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MongoDB backed document store.
//!
//! [`MongoStore`] owns at most one `mongodb::Client`, created lazily on the
//! first `connect` and shared by every later call. [`classify`] recognizes
//! driver errors by server error code.

pub mod classify;
pub mod store;

pub use classify::{driver_codes, is_duplicate_key_error, is_error, map_driver_err};
pub use store::MongoStore;
