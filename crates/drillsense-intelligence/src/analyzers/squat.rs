// ABOUTME: Squat analyzer tracking knee flexion depth, hip-angle steadiness, and hip drive
// ABOUTME: Deeper minimum knee angle raises flexibility; a wobbling hip angle lowers stability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::{BodyPart, DrillKind, DrillResult, Frame, MetricScores};

use super::{DrillAnalyzer, FrameIngest};
use crate::config::{AnalysisConfig, DrillTuning};
use crate::geometry::{angle_at, Motion};
use crate::statistics::{stability_from_variance, RangeTracker, SlidingWindow, VelocityTracker};

/// Squat scoring
///
/// - flexibility: `(180 - min knee angle) * flexibility_scale`; a 90 degree
///   squat earns full marks
/// - stability: `100 - k * var(hip angle)` over the recent window, 100 until
///   enough samples exist
/// - power: peak upward hip velocity, scaled
#[derive(Debug, Clone)]
pub struct SquatAnalyzer {
    ingest: FrameIngest,
    tuning: DrillTuning,
    knee: RangeTracker,
    hip_angles: SlidingWindow,
    hip_drive: VelocityTracker,
}

impl SquatAnalyzer {
    /// Create an analyzer with the squat tuning from `config`
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        let tuning = config.drills.squat.clone();
        Self {
            ingest: FrameIngest::new(DrillKind::Squat, config),
            hip_angles: SlidingWindow::new(tuning.stability_window),
            hip_drive: VelocityTracker::new(Motion::Vertical, tuning.velocity_window),
            knee: RangeTracker::new(),
            tuning,
        }
    }

    /// Deepest knee angle seen so far
    #[must_use]
    pub const fn min_knee_angle(&self) -> Option<f64> {
        self.knee.min()
    }
}

impl DrillAnalyzer for SquatAnalyzer {
    fn drill(&self) -> DrillKind {
        self.ingest.drill()
    }

    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) {
        let frame = self.ingest.ingest(frame);
        let side = self.tuning.dominant_side;
        let shoulder = frame.get(side.pick(BodyPart::LeftShoulder, BodyPart::RightShoulder));
        let hip = frame.get(side.pick(BodyPart::LeftHip, BodyPart::RightHip));
        let knee = frame.get(side.pick(BodyPart::LeftKnee, BodyPart::RightKnee));
        let ankle = frame.get(side.pick(BodyPart::LeftAnkle, BodyPart::RightAnkle));

        self.knee.observe(angle_at(hip, knee, ankle));

        let hip_angle = angle_at(knee, hip, shoulder);
        if hip_angle > 0.0 {
            self.hip_angles.push(hip_angle);
        }

        self.hip_drive.observe(hip, timestamp_ms);
    }

    fn frames_processed(&self) -> u64 {
        self.ingest.frames()
    }

    fn scores(&self) -> MetricScores {
        let flexibility = self.knee.flexion_below_neutral() * self.tuning.flexibility_scale;

        let stability = if self.hip_angles.len() >= self.tuning.min_stability_samples {
            stability_from_variance(self.hip_angles.variance(), self.tuning.stability_scale)
        } else {
            100.0
        };

        // Measured from hip rise rather than derived from the other two metrics
        let power = self.hip_drive.peak_positive() * self.tuning.velocity_scale;

        MetricScores::from_raw(flexibility, power, stability)
    }

    fn results(&self) -> DrillResult {
        self.ingest.finalize(self.scores())
    }
}
