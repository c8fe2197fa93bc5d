// ABOUTME: Main library entry point for the drillsense pose-metric analysis platform
// ABOUTME: Wires analyzers into practice sessions, result history, replay, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Drillsense
//!
//! Scores exercise and sport technique drills from a stream of 2-D pose
//! keypoints. Each frame passes through a smoothing filter into a stateful
//! per-drill analyzer; on demand the analyzer produces flexibility, power and
//! stability scores in `[0, 100]` plus coaching feedback.
//!
//! ## Architecture
//!
//! - **drillsense-core**: keypoint/frame models, drill identifiers, errors, constants
//! - **drillsense-intelligence**: geometry, smoothing, analyzers, factory, feedback
//! - **session**: auth-gated lifecycle around one analyzer
//! - **history**: async persistence collaborator and history views
//! - **replay**: JSON Lines session replay used by the `drillsense-replay` binary
//! - **logging**: `tracing-subscriber` setup for binaries

/// Structured logging setup
pub mod logging;

/// Session history storage and summaries
pub mod history;

/// Replay of recorded sessions
pub mod replay;

/// Practice session lifecycle
pub mod session;

pub use drillsense_core::{
    constants, errors, models, AppError, AppResult, BodyPart, DrillKind, DrillResult, ErrorCode,
    Frame, Keypoint, MetricScores,
};
pub use drillsense_intelligence as intelligence;
pub use drillsense_intelligence::{create_analyzer, Analyzer, DrillAnalyzer};
