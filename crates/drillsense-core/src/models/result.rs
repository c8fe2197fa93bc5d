// ABOUTME: Bounded metric scores and the immutable drill result snapshot
// ABOUTME: DrillResult is the record handed to presentation and persistence collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::drill::DrillKind;
use crate::constants::scoring::{MAX_SCORE, MIN_SCORE};

/// Convert a raw metric value to an integer score in `[0, 100]`
///
/// Rounds to nearest, then saturates. NaN maps to 0 so a degenerate
/// accumulator can never leak a non-number into a result.
#[must_use]
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    let bounded = value.round().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
    // Safe: bounded to [0, 100] above
    bounded as u8
}

/// The three session metrics, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricScores {
    /// Range-of-motion score
    pub flexibility: u8,
    /// Velocity-derived score
    pub power: u8,
    /// Positional-variance score
    pub stability: u8,
}

impl MetricScores {
    /// Build scores from raw metric values, clamping each into range
    #[must_use]
    pub fn from_raw(flexibility: f64, power: f64, stability: f64) -> Self {
        Self {
            flexibility: clamp_score(flexibility),
            power: clamp_score(power),
            stability: clamp_score(stability),
        }
    }

    /// Rounded mean of the three scores
    #[must_use]
    pub fn overall(&self) -> u8 {
        let sum = u16::from(self.flexibility) + u16::from(self.power) + u16::from(self.stability);
        clamp_score(f64::from(sum) / 3.0)
    }
}

/// Finalized outcome of one analysis session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillResult {
    /// Drill that was analyzed
    pub drill_type: DrillKind,
    /// Number of frames fed to the analyzer, including ones with no usable landmarks
    pub total_frames: u64,
    /// Range-of-motion score
    pub flexibility: u8,
    /// Velocity-derived score
    pub power: u8,
    /// Positional-variance score
    pub stability: u8,
    /// Mean of the three scores
    pub score: u8,
    /// Ordered coaching feedback
    pub feedback: Vec<String>,
}

impl DrillResult {
    /// Assemble a result from scores and synthesized feedback
    #[must_use]
    pub fn new(
        drill_type: DrillKind,
        total_frames: u64,
        scores: MetricScores,
        feedback: Vec<String>,
    ) -> Self {
        Self {
            drill_type,
            total_frames,
            flexibility: scores.flexibility,
            power: scores.power,
            stability: scores.stability,
            score: scores.overall(),
            feedback,
        }
    }

    /// The three metric scores of this result
    #[must_use]
    pub const fn scores(&self) -> MetricScores {
        MetricScores {
            flexibility: self.flexibility,
            power: self.power,
            stability: self.stability,
        }
    }
}
