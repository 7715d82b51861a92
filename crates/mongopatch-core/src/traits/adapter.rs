// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all store adapters implement.

use async_trait::async_trait;

use crate::error::MongoPatchError;
use crate::types::HealthStatus;

/// Identity, health and shutdown for an adapter instance.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, MongoPatchError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), MongoPatchError>;
}
