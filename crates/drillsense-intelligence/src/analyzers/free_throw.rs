// ABOUTME: Basketball free-throw analyzer: shooting-elbow range, release wrist speed, hip sway
// ABOUTME: Hip position is the midpoint of both hips when visible, the shooting-side hip otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::{BodyPart, DrillKind, DrillResult, Frame, MetricScores};

use super::{DrillAnalyzer, FrameIngest, SwingMetrics};
use crate::config::{AnalysisConfig, DrillTuning};
use crate::geometry::{angle_at, Motion};

/// Free-throw scoring
///
/// - flexibility: elbow-angle travel on the shooting arm
/// - power: peak wrist speed
/// - stability: variance of hip x position
#[derive(Debug, Clone)]
pub struct FreeThrowAnalyzer {
    ingest: FrameIngest,
    tuning: DrillTuning,
    metrics: SwingMetrics,
}

impl FreeThrowAnalyzer {
    /// Create an analyzer with the free-throw tuning from `config`
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        let tuning = config.drills.basketball_free_throw.clone();
        Self {
            ingest: FrameIngest::new(DrillKind::BasketballFreeThrow, config),
            metrics: SwingMetrics::new(Motion::Speed, &tuning),
            tuning,
        }
    }
}

impl DrillAnalyzer for FreeThrowAnalyzer {
    fn drill(&self) -> DrillKind {
        self.ingest.drill()
    }

    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) {
        let frame = self.ingest.ingest(frame);
        let side = self.tuning.dominant_side;
        let shoulder = frame.get(side.pick(BodyPart::LeftShoulder, BodyPart::RightShoulder));
        let elbow = frame.get(side.pick(BodyPart::LeftElbow, BodyPart::RightElbow));
        let wrist = frame.get(side.pick(BodyPart::LeftWrist, BodyPart::RightWrist));
        let hip = side.pick(BodyPart::LeftHip, BodyPart::RightHip);

        self.metrics.observe_angle(angle_at(shoulder, elbow, wrist));
        self.metrics.observe_joint(wrist, timestamp_ms);

        let hip_x = frame
            .midpoint(BodyPart::LeftHip, BodyPart::RightHip)
            .or_else(|| frame.confident(hip).copied())
            .map(|kp| kp.x);
        self.metrics.observe_position(hip_x);
    }

    fn frames_processed(&self) -> u64 {
        self.ingest.frames()
    }

    fn scores(&self) -> MetricScores {
        self.metrics.scores(self.metrics.angle().span(), &self.tuning)
    }

    fn results(&self) -> DrillResult {
        self.ingest.finalize(self.scores())
    }
}
