// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the smart home crate.
//!
//! Device and façade operations never fail: out-of-range writes and guarded
//! commands are dropped silently or reported as events. The errors below only
//! cover the fallible edges of the crate: building regulated values, parsing
//! text into domain types, and loading configuration.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while loading configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// The lower bound of a range is greater than its upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// An unknown device status string was provided.
    #[error("invalid device status: {0}")]
    InvalidStatus(String),

    /// An unknown home command was provided.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse failure.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured regulator is not a valid range.
    #[error("invalid {field} setting: {source}")]
    Value {
        /// The offending configuration field.
        field: &'static str,
        /// The underlying validation failure.
        source: ValueError,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
