// ABOUTME: Soccer penalty analyzer: kicking-knee backswing, hip drive toward the ball, torso sway
// ABOUTME: Backswing depth is scored like squat depth, as flexion below a straight leg
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::{BodyPart, DrillKind, DrillResult, Frame, MetricScores};

use super::{DrillAnalyzer, FrameIngest, SwingMetrics};
use crate::config::{AnalysisConfig, DrillTuning};
use crate::geometry::{angle_at, Motion};

/// Soccer penalty scoring
///
/// - flexibility: `180 - min kicking-knee angle`, scaled so 90 degrees of flexion is full marks
/// - power: peak horizontal hip speed on the kicking side
/// - stability: variance of the shoulder midpoint x position
#[derive(Debug, Clone)]
pub struct SoccerPenaltyAnalyzer {
    ingest: FrameIngest,
    tuning: DrillTuning,
    metrics: SwingMetrics,
}

impl SoccerPenaltyAnalyzer {
    /// Create an analyzer with the soccer-penalty tuning from `config`
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        let tuning = config.drills.soccer_penalty.clone();
        Self {
            ingest: FrameIngest::new(DrillKind::SoccerPenalty, config),
            metrics: SwingMetrics::new(Motion::Horizontal, &tuning),
            tuning,
        }
    }
}

impl DrillAnalyzer for SoccerPenaltyAnalyzer {
    fn drill(&self) -> DrillKind {
        self.ingest.drill()
    }

    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) {
        let frame = self.ingest.ingest(frame);
        let side = self.tuning.dominant_side;
        let hip = frame.get(side.pick(BodyPart::LeftHip, BodyPart::RightHip));
        let knee = frame.get(side.pick(BodyPart::LeftKnee, BodyPart::RightKnee));
        let ankle = frame.get(side.pick(BodyPart::LeftAnkle, BodyPart::RightAnkle));

        self.metrics.observe_angle(angle_at(hip, knee, ankle));
        self.metrics.observe_joint(hip, timestamp_ms);
        self.metrics.observe_position(
            frame
                .midpoint(BodyPart::LeftShoulder, BodyPart::RightShoulder)
                .map(|kp| kp.x),
        );
    }

    fn frames_processed(&self) -> u64 {
        self.ingest.frames()
    }

    fn scores(&self) -> MetricScores {
        let backswing = self.metrics.angle().flexion_below_neutral();
        self.metrics.scores(backswing, &self.tuning)
    }

    fn results(&self) -> DrillResult {
        self.ingest.finalize(self.scores())
    }
}
