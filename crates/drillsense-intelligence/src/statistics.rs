// ABOUTME: Streaming accumulators for per-drill metrics: sliding windows, extrema, joint velocity
// ABOUTME: Bounded FIFO buffers with saturating score conversions shared by every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streaming statistics used by the drill analyzers

use std::collections::VecDeque;

use drillsense_core::constants::geometry::NEUTRAL_JOINT_ANGLE_DEGREES;
use drillsense_core::Keypoint;

use crate::geometry::{directional_velocity, Motion};

/// Fixed-capacity FIFO of scalar samples
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create a window holding at most `capacity` samples (minimum 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full; non-finite samples are dropped
    pub fn push(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Number of retained samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum retained samples
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Arithmetic mean, `0.0` when empty
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Mean of absolute values, `0.0` when empty
    #[must_use]
    pub fn mean_magnitude(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().map(|v| v.abs()).sum::<f64>() / self.values.len() as f64
    }

    /// Population variance, `0.0` with fewer than two samples
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }
        let mean = self.mean();
        self.values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / self.values.len() as f64
    }

    /// Smallest retained sample
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest retained sample
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Running minimum and maximum of a joint angle over the whole session
///
/// The `0.0` unmeasurable sentinel and non-finite readings are ignored, so a
/// dropped landmark never disturbs extrema already accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeTracker {
    min: Option<f64>,
    max: Option<f64>,
    samples: u64,
}

impl RangeTracker {
    /// Create an empty tracker
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
            samples: 0,
        }
    }

    /// Record a reading; returns whether it was accepted
    pub fn observe(&mut self, angle: f64) -> bool {
        if !angle.is_finite() || angle <= 0.0 {
            return false;
        }
        self.min = Some(self.min.map_or(angle, |m| m.min(angle)));
        self.max = Some(self.max.map_or(angle, |m| m.max(angle)));
        self.samples += 1;
        true
    }

    /// Smallest accepted reading
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest accepted reading
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Accepted reading count
    #[must_use]
    pub const fn samples(&self) -> u64 {
        self.samples
    }

    /// Degrees between the extrema, `0.0` before any reading
    #[must_use]
    pub fn span(&self) -> f64 {
        match (self.min, self.max) {
            (Some(min), Some(max)) => max - min,
            _ => 0.0,
        }
    }

    /// Degrees the minimum reached below full extension, `0.0` before any reading
    #[must_use]
    pub fn flexion_below_neutral(&self) -> f64 {
        self.min
            .map_or(0.0, |min| (NEUTRAL_JOINT_ANGLE_DEGREES - min).max(0.0))
    }
}

/// Velocity history of a single tracked joint
///
/// Each observation remembers its own timestamp, so frames where the joint is
/// missing simply widen the elapsed time of the next sample.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    motion: Motion,
    last: Option<(Keypoint, f64)>,
    samples: SlidingWindow,
    peak_magnitude: f64,
    peak_positive: f64,
}

impl VelocityTracker {
    /// Track `motion` with a bounded sample history
    #[must_use]
    pub fn new(motion: Motion, window: usize) -> Self {
        Self {
            motion,
            last: None,
            samples: SlidingWindow::new(window),
            peak_magnitude: 0.0,
            peak_positive: 0.0,
        }
    }

    /// Feed the joint's observation for one frame
    ///
    /// Returns the velocity sample recorded for this frame, if any. Missing or
    /// unconfident observations are no-ops, as are non-finite timestamps; a
    /// non-advancing clock records nothing but still moves the reference
    /// point forward.
    pub fn observe(&mut self, keypoint: Option<&Keypoint>, timestamp_ms: f64) -> Option<f64> {
        if !timestamp_ms.is_finite() {
            return None;
        }
        let current = keypoint.filter(|kp| kp.is_confident())?;

        let sample = self.last.and_then(|(previous, previous_ms)| {
            let dt = timestamp_ms - previous_ms;
            (dt > 0.0).then(|| directional_velocity(Some(&previous), Some(current), dt, self.motion))
        });

        if let Some(value) = sample {
            self.samples.push(value);
            self.peak_magnitude = self.peak_magnitude.max(value.abs());
            self.peak_positive = self.peak_positive.max(value);
        }
        self.last = Some((*current, timestamp_ms));
        sample
    }

    /// Largest absolute velocity seen this session
    #[must_use]
    pub const fn peak_magnitude(&self) -> f64 {
        self.peak_magnitude
    }

    /// Largest positive velocity seen this session (rising / rightward)
    #[must_use]
    pub const fn peak_positive(&self) -> f64 {
        self.peak_positive
    }

    /// Mean absolute velocity over the retained window
    #[must_use]
    pub fn mean_magnitude(&self) -> f64 {
        self.samples.mean_magnitude()
    }

    /// Number of retained samples
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

/// Stability score from a variance: `100 - k * variance`, saturating at both ends
#[must_use]
pub fn stability_from_variance(variance: f64, scale: f64) -> f64 {
    if !variance.is_finite() {
        return 0.0;
    }
    (100.0 - scale * variance.max(0.0)).clamp(0.0, 100.0)
}
