// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memoized MongoDB client.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use mongopatch_config::MongoConfig;
use mongopatch_core::{DocumentStore, HealthStatus, MongoPatchError, PluginAdapter};

use crate::classify::map_driver_err;

/// Owns the single client every `connect` call hands out.
///
/// The client slot sits behind an async mutex, so concurrent first calls
/// build exactly one client. The driver keeps its own pool and reconnects on
/// its own; this type only decides when a client exists.
pub struct MongoStore {
    config: MongoConfig,
    client: Mutex<Option<Client>>,
}

impl MongoStore {
    /// Create a store for the given configuration. Nothing is opened yet.
    pub fn new(config: MongoConfig) -> Self {
        Self {
            config,
            client: Mutex::new(None),
        }
    }

    /// Create a store with default options bound to `connection_uri`.
    pub fn with_uri(connection_uri: impl Into<String>) -> Self {
        Self::new(MongoConfig::with_uri(connection_uri))
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    /// Whether a client currently exists.
    pub async fn is_open(&self) -> bool {
        self.client.lock().await.is_some()
    }

    /// Parse the connection URI and apply the configured overrides.
    ///
    /// A URI or option the driver rejects is a configuration problem, not a
    /// driver failure: nothing has reached a server yet.
    async fn client_options(&self) -> Result<ClientOptions, MongoPatchError> {
        let mut options = ClientOptions::parse(self.config.connection_uri.as_str())
            .await
            .map_err(|e| MongoPatchError::Config(format!("invalid connection uri: {e}")))?;
        if let Some(app_name) = &self.config.app_name {
            options.app_name = Some(app_name.clone());
        }
        options.server_selection_timeout =
            Some(Duration::from_millis(self.config.server_selection_timeout_ms));
        options.connect_timeout = Some(Duration::from_millis(self.config.connect_timeout_ms));
        Ok(options)
    }

    /// The memoized client, building it on first use.
    async fn client(&self) -> Result<Client, MongoPatchError> {
        let mut slot = self.client.lock().await;
        if let Some(client) = slot.as_ref() {
            debug!("reusing memoized client");
            return Ok(client.clone());
        }

        let client = Client::with_options(self.client_options().await?)
            .map_err(|e| MongoPatchError::Config(format!("invalid client options: {e}")))?;
        debug!(app_name = ?self.config.app_name, "created client");
        *slot = Some(client.clone());
        Ok(client)
    }

    async fn ping(client: &Client) -> Result<(), MongoPatchError> {
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_driver_err)?;
        Ok(())
    }
}

#[async_trait]
impl PluginAdapter for MongoStore {
    fn name(&self) -> &str {
        "mongodb"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, MongoPatchError> {
        let client = self.client.lock().await.clone();
        let Some(client) = client else {
            return Ok(HealthStatus::Unhealthy("not connected".into()));
        };
        match Self::ping(&client).await {
            Ok(()) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), MongoPatchError> {
        self.close().await
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    type Handle = Client;

    /// Returns the memoized client after confirming the deployment answers a
    /// `ping`. A failed ping keeps the client for the next attempt.
    async fn connect(&self) -> Result<Client, MongoPatchError> {
        let client = self.client().await?;
        if let Err(e) = Self::ping(&client).await {
            warn!(error = %e, "ping failed while connecting");
            return Err(e);
        }
        debug!("connected");
        Ok(client)
    }

    async fn close(&self) -> Result<(), MongoPatchError> {
        let taken = self.client.lock().await.take();
        match taken {
            Some(client) => {
                client.shutdown().await;
                debug!("client closed");
            }
            None => debug!("close called without an open client, nothing to release"),
        }
        Ok(())
    }
}
