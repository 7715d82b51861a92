// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server error codes and their normalized representation.
//!
//! Drivers are not consistent about the type of an error code: the same
//! failure may carry `11000` or `"11000"`. [`ErrorCode`] normalizes both
//! sides to one canonical string before any comparison.

use std::fmt;

use serde::Serialize;

/// Unique index constraint violation.
pub const DUPLICATE_KEY: i32 = 11000;

/// A normalized server error code.
///
/// Integers use their decimal form. Strings are trimmed, and strings that
/// parse as an integer are rewritten to that integer's decimal form, so
/// `ErrorCode::from(11000) == ErrorCode::from("011000")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Normalize a textual code.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(numeric) => Self(numeric.to_string()),
            Err(_) => Self(trimmed.to_string()),
        }
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value, when the code is numeric.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ErrorCode {
                fn from(code: $ty) -> Self {
                    Self(code.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i16, i32, i64, u16, u32, u64);

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<&ErrorCode> for ErrorCode {
    fn from(code: &ErrorCode) -> Self {
        code.clone()
    }
}

/// The well-known error codes callers classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownErrors {
    pub duplicate_key: i32,
}

impl Default for KnownErrors {
    fn default() -> Self {
        Self {
            duplicate_key: DUPLICATE_KEY,
        }
    }
}
