// ABOUTME: Core types and constants for the drillsense pose-metric platform
// ABOUTME: Foundation crate with keypoint/frame models, drill identifiers, errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Drillsense Core
//!
//! Foundation crate providing shared types for the drillsense analysis core.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Landmark layout, confidence gate, smoothing and scoring defaults
//! - **models**: `Keypoint`, `BodyPart`, `Frame`, `DrillKind`, `DrillResult`

/// Unified error handling system with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Core data models (keypoints, frames, drills, results)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{BodyPart, DrillKind, DrillResult, Frame, Keypoint, MetricScores};
