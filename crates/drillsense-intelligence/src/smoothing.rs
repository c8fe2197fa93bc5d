// ABOUTME: Exponential-moving-average keypoint stabilizer with bounded frame history
// ABOUTME: Damps pose-model jitter before any angle or velocity is computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keypoint smoothing filter
//!
//! `smoothed = previous + alpha * (raw - previous)` per confident landmark.
//! Only the most recent smoothed frame feeds the blend; older history is kept
//! for inspection and evicted oldest-first.

use std::collections::VecDeque;

use drillsense_core::constants::smoothing::{DEFAULT_ALPHA, DEFAULT_HISTORY_FRAMES};
use drillsense_core::{BodyPart, Frame, Keypoint};

use crate::config::SmoothingConfig;

/// Per-session exponential moving average over keypoint frames
#[derive(Debug, Clone)]
pub struct KeypointSmoother {
    alpha: f64,
    capacity: usize,
    history: VecDeque<Frame>,
}

impl Default for KeypointSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_HISTORY_FRAMES)
    }
}

impl KeypointSmoother {
    /// Create a smoother; `alpha` is clamped into `[0, 1]` and capacity is at least 1
    #[must_use]
    pub fn new(alpha: f64, capacity: usize) -> Self {
        let alpha = if alpha.is_nan() {
            DEFAULT_ALPHA
        } else {
            alpha.clamp(0.0, 1.0)
        };
        let capacity = capacity.max(1);
        Self {
            alpha,
            capacity,
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Create a smoother from analysis configuration
    #[must_use]
    pub fn from_config(config: &SmoothingConfig) -> Self {
        Self::new(config.alpha, config.history_frames)
    }

    /// Blend factor in use
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smooth one raw frame against the previous smoothed frame and remember it
    ///
    /// The first frame of a session passes through unchanged. Landmarks below
    /// the confidence threshold, or with no previous observation, keep their
    /// raw values.
    pub fn smooth(&mut self, raw: &Frame) -> Frame {
        let smoothed = match self.history.back() {
            None => raw.clone(),
            Some(previous) => self.blend(previous, raw),
        };

        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(smoothed.clone());
        smoothed
    }

    fn blend(&self, previous: &Frame, raw: &Frame) -> Frame {
        let mut out = raw.clone();
        for part in BodyPart::ALL {
            let (Some(current), Some(last)) = (raw.confident(part), previous.get(part)) else {
                continue;
            };
            // Non-finite history restarts from the raw point
            if !(last.x.is_finite() && last.y.is_finite()) {
                continue;
            }
            out.set(
                part,
                Some(Keypoint {
                    x: self.alpha.mul_add(current.x - last.x, last.x),
                    y: self.alpha.mul_add(current.y - last.y, last.y),
                    score: current.score,
                }),
            );
        }
        out
    }

    /// Smoothed frames currently retained, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Frame> {
        self.history.iter()
    }

    /// Number of retained smoothed frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no frame has been smoothed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
