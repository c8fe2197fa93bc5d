// ABOUTME: Constants for pose landmarks, confidence gating, smoothing, and scoring
// ABOUTME: Pure data constants organized by domain for the drillsense analysis core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Grouped by domain so analyzers and configuration defaults share one source of truth.

/// Pose-model output layout
pub mod pose {
    /// Number of landmarks produced per frame (17-point layout)
    pub const KEYPOINT_COUNT: usize = 17;

    /// Keypoints scoring below this are treated as absent
    pub const MIN_KEYPOINT_CONFIDENCE: f64 = 0.3;
}

/// Joint-angle geometry
pub mod geometry {
    /// Fully extended joint, the neutral baseline for range-of-motion scores
    pub const NEUTRAL_JOINT_ANGLE_DEGREES: f64 = 180.0;

    /// Angle returned when a joint cannot be measured
    pub const UNMEASURABLE_ANGLE: f64 = 0.0;

    /// Milliseconds per second, for px/ms to px/s conversion
    pub const MILLIS_PER_SECOND: f64 = 1000.0;
}

/// Keypoint smoothing defaults
pub mod smoothing {
    /// Exponential moving average blend factor
    pub const DEFAULT_ALPHA: f64 = 0.3;

    /// Smoothed frames retained per analyzer
    pub const DEFAULT_HISTORY_FRAMES: usize = 10;
}

/// Score ranges and feedback bands
pub mod scoring {
    /// Lowest metric score
    pub const MIN_SCORE: u8 = 0;

    /// Highest metric score
    pub const MAX_SCORE: u8 = 100;

    /// Band threshold for "excellent"
    pub const EXCELLENT_THRESHOLD: u8 = 90;

    /// Band threshold for "good"
    pub const GOOD_THRESHOLD: u8 = 80;

    /// Band threshold for "fair"
    pub const FAIR_THRESHOLD: u8 = 70;

    /// Feedback lines returned per result
    pub const DEFAULT_MAX_FEEDBACK_ITEMS: usize = 5;

    /// Angular travel (degrees) that earns a full range-of-motion score
    pub const FULL_RANGE_DEGREES: f64 = 90.0;
}

/// Per-drill tuning defaults
pub mod drills {
    /// Squat: score points per px/s of peak upward hip velocity
    pub const SQUAT_VELOCITY_SCALE: f64 = 0.5;
    /// Squat: hip-angle variance multiplier
    pub const SQUAT_STABILITY_SCALE: f64 = 2.0;
    /// Squat: hip-angle window length
    pub const SQUAT_STABILITY_WINDOW: usize = 10;
    /// Squat: samples required before hip variance counts
    pub const SQUAT_MIN_STABILITY_SAMPLES: usize = 6;

    /// Push-up: elbow extension score points per degree
    pub const PUSHUP_EXTENSION_SCALE: f64 = 0.8;
    /// Push-up: hip speed multiplier for the explosive component
    pub const PUSHUP_VELOCITY_SCALE: f64 = 10.0;
    /// Push-up: elbow-angle variance multiplier
    pub const PUSHUP_STABILITY_SCALE: f64 = 5.0;
    /// Push-up: elbow-angle and hip-speed window length
    pub const PUSHUP_WINDOW: usize = 20;
    /// Push-up: samples required before elbow variance counts
    pub const PUSHUP_MIN_STABILITY_SAMPLES: usize = 2;

    /// Sport drills: positional variance multiplier
    pub const SPORT_STABILITY_SCALE: f64 = 0.1;
    /// Sport drills: positional history length
    pub const SPORT_STABILITY_WINDOW: usize = 60;
    /// Sport drills: velocity history length
    pub const SPORT_VELOCITY_WINDOW: usize = 60;
}

/// Service identity for structured logging
pub mod service_names {
    /// Name reported by the logging layer
    pub const DRILLSENSE: &str = "drillsense";
}
