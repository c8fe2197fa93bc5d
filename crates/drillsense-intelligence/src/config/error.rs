// ABOUTME: Configuration error types for analysis configuration validation
// ABOUTME: Defines error variants for invalid ranges, bad scales, and environment parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analysis configuration validation.

use drillsense_core::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., blend factor not in (0, 1])
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Feedback band thresholds are not strictly descending
    #[error("Invalid bands: {0}")]
    InvalidBands(&'static str),

    /// Window or sample-count parameter is unusable
    #[error("Invalid window: {0}")]
    InvalidWindow(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
