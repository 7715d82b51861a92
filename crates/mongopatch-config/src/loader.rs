// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./mongopatch.toml` > `~/.config/mongopatch/mongopatch.toml`
//! > `/etc/mongopatch/mongopatch.toml` with environment variable overrides via
//! the `MONGOPATCH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MongoPatchConfig;

pub(crate) const LOCAL_CONFIG: &str = "mongopatch.toml";
pub(crate) const SYSTEM_CONFIG: &str = "/etc/mongopatch/mongopatch.toml";

/// Location of the per-user config file, if a config dir is known.
pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mongopatch").join(LOCAL_CONFIG))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mongopatch/mongopatch.toml` (system-wide)
/// 3. `~/.config/mongopatch/mongopatch.toml` (user XDG config)
/// 4. `./mongopatch.toml` (local directory)
/// 5. `MONGOPATCH_*` environment variables
pub fn load_config() -> Result<MongoPatchConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<MongoPatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MongoPatchConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MongoPatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MongoPatchConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MongoPatchConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Render the compiled defaults as a TOML document.
pub fn default_config_toml() -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&MongoPatchConfig::default())
}

/// Environment provider mapping `MONGOPATCH_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys contain
/// underscores: `MONGOPATCH_MONGO_CONNECTION_URI` must become
/// `mongo.connection_uri`, not `mongo.connection.uri`.
fn env_provider() -> Env {
    Env::prefixed("MONGOPATCH_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("mongo_", "mongo.", 1)
            .replacen("logging_", "logging.", 1);
        mapped.into()
    })
}
