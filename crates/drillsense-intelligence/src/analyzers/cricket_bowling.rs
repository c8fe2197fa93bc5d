// ABOUTME: Cricket bowling analyzer: shoulder counter-rotation, bowling-arm speed, head bob
// ABOUTME: Rotation is the angle at the bowling shoulder between the other shoulder and the hip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::{BodyPart, DrillKind, DrillResult, Frame, MetricScores};

use super::{DrillAnalyzer, FrameIngest, SwingMetrics};
use crate::config::{AnalysisConfig, DrillTuning};
use crate::geometry::{angle_at, Motion};

/// Cricket bowling scoring
///
/// - flexibility: travel of the shoulder-line/torso angle at the bowling shoulder
/// - power: peak bowling-wrist speed
/// - stability: variance of nose y position
#[derive(Debug, Clone)]
pub struct CricketBowlingAnalyzer {
    ingest: FrameIngest,
    tuning: DrillTuning,
    metrics: SwingMetrics,
}

impl CricketBowlingAnalyzer {
    /// Create an analyzer with the cricket-bowling tuning from `config`
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        let tuning = config.drills.cricket_bowling.clone();
        Self {
            ingest: FrameIngest::new(DrillKind::CricketBowling, config),
            metrics: SwingMetrics::new(Motion::Speed, &tuning),
            tuning,
        }
    }
}

impl DrillAnalyzer for CricketBowlingAnalyzer {
    fn drill(&self) -> DrillKind {
        self.ingest.drill()
    }

    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) {
        let frame = self.ingest.ingest(frame);
        let side = self.tuning.dominant_side;
        let shoulder = frame.get(side.pick(BodyPart::LeftShoulder, BodyPart::RightShoulder));
        let other_shoulder = frame.get(
            side.opposite()
                .pick(BodyPart::LeftShoulder, BodyPart::RightShoulder),
        );
        let hip = frame.get(side.pick(BodyPart::LeftHip, BodyPart::RightHip));
        let wrist = frame.get(side.pick(BodyPart::LeftWrist, BodyPart::RightWrist));

        self.metrics.observe_angle(angle_at(other_shoulder, shoulder, hip));
        self.metrics.observe_joint(wrist, timestamp_ms);
        self.metrics
            .observe_position(frame.confident(BodyPart::Nose).map(|kp| kp.y));
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
