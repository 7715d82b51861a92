// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document store adapter trait.

use async_trait::async_trait;

use crate::error::MongoPatchError;
use crate::traits::adapter::PluginAdapter;

/// Adapter owning at most one live connection handle to a document database.
///
/// Implementations memoize the handle: `connect` hands out the existing one
/// when present and only builds a new one when none exists. Concurrent first
/// calls must construct a single handle.
#[async_trait]
pub trait DocumentStore: PluginAdapter {
    /// The connection handle handed to callers. Cloning must be cheap.
    type Handle: Clone + Send + Sync + 'static;

    /// Returns the memoized handle, creating it on first use, and ensures it
    /// is connected before returning.
    async fn connect(&self) -> Result<Self::Handle, MongoPatchError>;

    /// Releases the handle. A no-op when no handle was ever created.
    async fn close(&self) -> Result<(), MongoPatchError>;
}
