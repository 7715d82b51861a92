// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for mongopatch.
//!
//! This crate provides the error type, the normalized error code used for
//! driver error classification, and the adapter traits implemented by
//! document store backends.

pub mod codes;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use codes::{ErrorCode, KnownErrors};
pub use error::{DriverError, MongoPatchError};
pub use traits::{DocumentStore, PluginAdapter};
pub use types::HealthStatus;
