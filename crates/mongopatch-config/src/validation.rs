// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as the connection string scheme and non-zero timeouts.

use crate::diagnostic::ConfigError;
use crate::model::MongoPatchConfig;

const URI_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MongoPatchConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let uri = config.mongo.connection_uri.trim();
    if uri.is_empty() {
        errors.push(ConfigError::Validation {
            message: "mongo.connection_uri must not be empty".to_string(),
        });
    } else if !URI_SCHEMES.iter().any(|scheme| uri.starts_with(scheme)) {
        errors.push(ConfigError::Validation {
            message: format!(
                "mongo.connection_uri must start with {}",
                URI_SCHEMES.join(" or ")
            ),
        });
    }

    if config.mongo.server_selection_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "mongo.server_selection_timeout_ms must be greater than zero".to_string(),
        });
    }

    if config.mongo.connect_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "mongo.connect_timeout_ms must be greater than zero".to_string(),
        });
    }

    if let Some(app_name) = &config.mongo.app_name {
        if app_name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "mongo.app_name must not be blank when set".to_string(),
            });
        }
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
