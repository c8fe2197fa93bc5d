// ABOUTME: Push-up analyzer tracking elbow travel, lockout extension, hip speed, and elbow consistency
// ABOUTME: Power blends peak elbow extension with mean vertical hip speed over the recent window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::constants::drills::PUSHUP_EXTENSION_SCALE;
use drillsense_core::{BodyPart, DrillKind, DrillResult, Frame, MetricScores};

use super::{DrillAnalyzer, FrameIngest};
use crate::config::{AnalysisConfig, DrillTuning};
use crate::geometry::{angle_at, Motion};
use crate::statistics::{stability_from_variance, RangeTracker, SlidingWindow, VelocityTracker};

/// Push-up scoring
///
/// - flexibility: elbow-angle travel (max - min), scaled so 90 degrees is full marks
/// - power: mean of `max elbow angle * 0.8` and `mean |hip vertical speed| * velocity_scale`
/// - stability: `100 - k * var(elbow angle)` over the recent window
#[derive(Debug, Clone)]
pub struct PushupAnalyzer {
    ingest: FrameIngest,
    tuning: DrillTuning,
    elbow: RangeTracker,
    elbow_angles: SlidingWindow,
    hip_motion: VelocityTracker,
}

impl PushupAnalyzer {
    /// Create an analyzer with the push-up tuning from `config`
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        let tuning = config.drills.pushup.clone();
        Self {
            ingest: FrameIngest::new(DrillKind::Pushup, config),
            elbow_angles: SlidingWindow::new(tuning.stability_window),
            hip_motion: VelocityTracker::new(Motion::Vertical, tuning.velocity_window),
            elbow: RangeTracker::new(),
            tuning,
        }
    }
}

impl DrillAnalyzer for PushupAnalyzer {
    fn drill(&self) -> DrillKind {
        self.ingest.drill()
    }

    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) {
        let frame = self.ingest.ingest(frame);
        let side = self.tuning.dominant_side;
        let shoulder = frame.get(side.pick(BodyPart::LeftShoulder, BodyPart::RightShoulder));
        let elbow = frame.get(side.pick(BodyPart::LeftElbow, BodyPart::RightElbow));
        let wrist = frame.get(side.pick(BodyPart::LeftWrist, BodyPart::RightWrist));
        let hip = frame.get(side.pick(BodyPart::LeftHip, BodyPart::RightHip));

        let elbow_angle = angle_at(shoulder, elbow, wrist);
        if self.elbow.observe(elbow_angle) {
            self.elbow_angles.push(elbow_angle);
        }

        self.hip_motion.observe(hip, timestamp_ms);
    }

    fn frames_processed(&self) -> u64 {
        self.ingest.frames()
    }

    fn scores(&self) -> MetricScores {
        let flexibility = self.elbow.span() * self.tuning.flexibility_scale;

        let extension = (self.elbow.max().unwrap_or(0.0) * PUSHUP_EXTENSION_SCALE).clamp(0.0, 100.0);
        let explosive =
            (self.hip_motion.mean_magnitude() * self.tuning.velocity_scale).clamp(0.0, 100.0);
        let power = (extension + explosive) / 2.0;

        let stability = if self.elbow_angles.len() >= self.tuning.min_stability_samples {
            stability_from_variance(self.elbow_angles.variance(), self.tuning.stability_scale)
        } else {
            100.0
        };

        MetricScores::from_raw(flexibility, power, stability)
    }

    fn results(&self) -> DrillResult {
        self.ingest.finalize(self.scores())
    }
}
