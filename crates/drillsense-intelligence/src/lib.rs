// ABOUTME: Pose-metric analysis engine turning keypoint streams into drill scores and feedback
// ABOUTME: Geometry, smoothing, streaming statistics, per-drill analyzers, and the analyzer factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Drillsense Intelligence
//!
//! Stateful per-drill analyzers consume 2-D pose frames one at a time and
//! report flexibility, power and stability scores in `[0, 100]` plus coaching
//! feedback.
//!
//! ```text
//! frame -> KeypointSmoother -> DrillAnalyzer::process_frame -> results()
//! ```
//!
//! Analyzers are single-owner and synchronous. Run one per session.

/// Per-drill analyzers and their common contract
pub mod analyzers;

/// Smoothing, feedback, and per-drill tuning configuration
pub mod config;

/// Analyzer factory
pub mod factory;

/// Threshold-band feedback synthesis
pub mod feedback;

/// Joint angle and velocity primitives
pub mod geometry;

/// Exponential-moving-average keypoint filter
pub mod smoothing;

/// Sliding windows, extrema and velocity trackers
pub mod statistics;

pub use analyzers::{Analyzer, DrillAnalyzer};
pub use config::{AnalysisConfig, ConfigError, DominantSide, DrillTuning};
pub use factory::{create_analyzer, create_analyzer_with_config};
pub use feedback::{FeedbackSynthesizer, ScoreBand};
pub use geometry::{angle_at, velocity};
pub use smoothing::KeypointSmoother;
