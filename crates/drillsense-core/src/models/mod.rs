// ABOUTME: Core data models for pose-metric analysis
// ABOUTME: Re-exports keypoint, frame, drill, and result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Drill enumeration
pub mod drill;
/// Keypoint frames
pub mod frame;
/// Body landmarks and keypoints
pub mod keypoint;
/// Scores and drill results
pub mod result;

pub use drill::DrillKind;
pub use frame::Frame;
pub use keypoint::{BodyPart, Keypoint};
pub use result::{clamp_score, DrillResult, MetricScores};
