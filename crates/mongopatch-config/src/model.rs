// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at load time, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level mongopatch configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MongoPatchConfig {
    /// Database client settings.
    #[serde(default)]
    pub mongo: MongoConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database client configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MongoConfig {
    /// Connection string every `connect` call targets.
    #[serde(default = "default_connection_uri")]
    pub connection_uri: String,

    /// Application name reported to the server in the connection handshake.
    #[serde(default)]
    pub app_name: Option<String>,

    /// How long server selection may take before `connect` fails.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,

    /// TCP connect timeout for individual server connections.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl MongoConfig {
    /// Defaults bound to the given connection string.
    pub fn with_uri(connection_uri: impl Into<String>) -> Self {
        Self {
            connection_uri: connection_uri.into(),
            ..Self::default()
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            connection_uri: default_connection_uri(),
            app_name: None,
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_connection_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_server_selection_timeout_ms() -> u64 {
    30_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
