// ABOUTME: Unified error handling for drillsense with standard error codes
// ABOUTME: Provides AppError, ErrorCode, and AppResult shared by every workspace crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Per-frame measurement gaps are never errors; only construction-time
//! misconfiguration, session misuse, and history-store failures surface here.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller supplied malformed input (bad JSON line, bad argument)
    InvalidInput,
    /// Drill identifier is not part of the closed drill enumeration
    UnknownDrill,
    /// No authenticated session is active
    AuthRequired,
    /// Operation attempted on a practice session that already finished
    SessionNotActive,
    /// Requested record does not exist
    ResourceNotFound,
    /// Record with the same identifier was already written
    ResourceAlreadyExists,
    /// Configuration failed validation
    ConfigInvalid,
    /// History store failed
    StorageError,
    /// Serialization or deserialization failed
    SerializationError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::UnknownDrill => "The requested drill is not supported",
            Self::AuthRequired => "An active sign-in session is required",
            Self::SessionNotActive => "The practice session is no longer accepting frames",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Unrecognized drill identifier
    pub fn unknown_drill(drill_id: impl AsRef<str>) -> Self {
        Self::new(
            ErrorCode::UnknownDrill,
            format!("Unknown drill type: {}", drill_id.as_ref()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Authentication required
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Sign in before starting a drill")
    }

    /// Practice session already finished
    pub fn session_not_active(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SessionNotActive, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}
