// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for mongopatch.

use thiserror::Error;

use crate::codes::ErrorCode;

/// The primary error type returned by store adapters and the facade.
#[derive(Debug, Error)]
pub enum MongoPatchError {
    /// Configuration errors (unparseable connection URI, invalid client options).
    #[error("configuration error: {0}")]
    Config(String),

    /// A failure surfaced by the database client.
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
}

impl MongoPatchError {
    /// The driver error carried by this error, if any.
    pub fn as_driver(&self) -> Option<&DriverError> {
        match self {
            MongoPatchError::Driver(driver) => Some(driver),
            _ => None,
        }
    }
}

/// An error reported by the database client.
///
/// Keeps the client's message and every server error code it reported
/// (normalized) next to the untouched original error, which stays reachable
/// through [`std::error::Error::source`]. Batch writes report one code per
/// failed write, so a single error can carry several.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DriverError {
    /// Server error codes, in the order the client reported them.
    pub codes: Vec<ErrorCode>,
    /// Human-readable message from the client.
    pub message: String,
    /// The original client error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DriverError {
    /// Create a driver error without a code or source.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            codes: Vec::new(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach a server error code. Repeated calls accumulate.
    pub fn with_code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.codes.push(code.into());
        self
    }

    /// The first reported code, if any.
    pub fn code(&self) -> Option<&ErrorCode> {
        self.codes.first()
    }

    /// Whether any reported code equals `code`.
    pub fn has_code(&self, code: &ErrorCode) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Attach the original client error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}
