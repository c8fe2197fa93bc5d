// ABOUTME: Tennis serve analyzer: shoulder opening of the hitting arm, racket-hand speed, head drift
// ABOUTME: Shoulder angle is measured between upper arm and torso on the dominant side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::{BodyPart, DrillKind, DrillResult, Frame, MetricScores};

use super::{DrillAnalyzer, FrameIngest, SwingMetrics};
use crate::config::{AnalysisConfig, DrillTuning};
use crate::geometry::{angle_at, Motion};

/// Tennis serve scoring
///
/// - flexibility: travel of the elbow-shoulder-hip angle
/// - power: peak hitting-wrist speed
/// - stability: variance of nose x position
#[derive(Debug, Clone)]
pub struct TennisServeAnalyzer {
    ingest: FrameIngest,
    tuning: DrillTuning,
    metrics: SwingMetrics,
}

impl TennisServeAnalyzer {
    /// Create an analyzer with the tennis-serve tuning from `config`
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        let tuning = config.drills.tennis_serve.clone();
        Self {
            ingest: FrameIngest::new(DrillKind::TennisServe, config),
            metrics: SwingMetrics::new(Motion::Speed, &tuning),
            tuning,
        }
    }
}

impl DrillAnalyzer for TennisServeAnalyzer {
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

        self.metrics.observe_angle(angle_at(elbow, shoulder, hip));
        self.metrics.observe_joint(wrist, timestamp_ms);
        self.metrics
            .observe_position(frame.confident(BodyPart::Nose).map(|kp| kp.x));
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
