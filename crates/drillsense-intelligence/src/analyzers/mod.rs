// ABOUTME: Common contract for stateful per-drill analyzers and the closed set of implementations
// ABOUTME: Shared frame ingestion (counting, smoothing) and result finalization live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-drill analyzers
//!
//! One analyzer instance per session. Frames are fed strictly in capture
//! order; [`DrillAnalyzer::results`] may be called at any point and never
//! changes analyzer state.

mod cricket_bowling;
mod free_throw;
mod pushup;
mod soccer_penalty;
mod squat;
mod tennis_serve;

pub use cricket_bowling::CricketBowlingAnalyzer;
pub use free_throw::FreeThrowAnalyzer;
pub use pushup::PushupAnalyzer;
pub use soccer_penalty::SoccerPenaltyAnalyzer;
pub use squat::SquatAnalyzer;
pub use tennis_serve::TennisServeAnalyzer;

use drillsense_core::{DrillKind, DrillResult, Frame, Keypoint, MetricScores};
use tracing::debug;

use crate::config::{AnalysisConfig, DrillTuning, FeedbackConfig};
use crate::feedback::FeedbackSynthesizer;
use crate::geometry::Motion;
use crate::smoothing::KeypointSmoother;
use crate::statistics::{stability_from_variance, RangeTracker, SlidingWindow, VelocityTracker};

/// Contract shared by every drill analyzer
pub trait DrillAnalyzer: Send {
    /// Drill this analyzer scores
    fn drill(&self) -> DrillKind;

    /// Ingest one frame captured at `timestamp_ms`
    ///
    /// Every call counts toward the frame total, even when no landmark in the
    /// frame is usable.
    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64);

    /// Frames ingested so far
    fn frames_processed(&self) -> u64;

    /// Current scores, each clamped to `[0, 100]`
    fn scores(&self) -> MetricScores;

    /// Snapshot the session as a finalized result with feedback
    fn results(&self) -> DrillResult;
}

/// State every analyzer carries regardless of drill
#[derive(Debug, Clone)]
pub(crate) struct FrameIngest {
    drill: DrillKind,
    frames: u64,
    smoother: Option<KeypointSmoother>,
    feedback: FeedbackConfig,
}

impl FrameIngest {
    pub(crate) fn new(drill: DrillKind, config: &AnalysisConfig) -> Self {
        let smoother = config
            .smoothing
            .enabled
            .then(|| KeypointSmoother::from_config(&config.smoothing));
        Self {
            drill,
            frames: 0,
            smoother,
            feedback: config.feedback.clone(),
        }
    }

    /// Count the frame and return the version analyzers should measure
    pub(crate) fn ingest(&mut self, raw: &Frame) -> Frame {
        self.frames += 1;
        match self.smoother.as_mut() {
            Some(smoother) => smoother.smooth(raw),
            None => raw.clone(),
        }
    }

    pub(crate) const fn drill(&self) -> DrillKind {
        self.drill
    }

    pub(crate) const fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn finalize(&self, scores: MetricScores) -> DrillResult {
        let feedback = FeedbackSynthesizer::new(&self.feedback).synthesize(self.drill, &scores);
        debug!(
            drill = %self.drill,
            frames = self.frames,
            flexibility = scores.flexibility,
            power = scores.power,
            stability = scores.stability,
            "Finalized drill result"
        );
        DrillResult::new(self.drill, self.frames, scores, feedback)
    }
}

/// Accumulators shared by the sport technique drills
///
/// Each drill decides which joint angle, which moving joint, and which
/// positional coordinate feed it.
#[derive(Debug, Clone)]
pub(crate) struct SwingMetrics {
    angle: RangeTracker,
    joint: VelocityTracker,
    position: SlidingWindow,
}

impl SwingMetrics {
    pub(crate) fn new(motion: Motion, tuning: &DrillTuning) -> Self {
        Self {
            angle: RangeTracker::new(),
            joint: VelocityTracker::new(motion, tuning.velocity_window),
            position: SlidingWindow::new(tuning.stability_window),
        }
    }

    pub(crate) fn observe_angle(&mut self, degrees: f64) {
        self.angle.observe(degrees);
    }

    pub(crate) fn observe_joint(&mut self, keypoint: Option<&Keypoint>, timestamp_ms: f64) {
        self.joint.observe(keypoint, timestamp_ms);
    }

    pub(crate) fn observe_position(&mut self, coordinate: Option<f64>) {
        if let Some(value) = coordinate {
            self.position.push(value);
        }
    }

    pub(crate) const fn angle(&self) -> &RangeTracker {
        &self.angle
    }

    /// Scores given the drill's range-of-motion reading in degrees
    pub(crate) fn scores(&self, range_degrees: f64, tuning: &DrillTuning) -> MetricScores {
        let flexibility = range_degrees * tuning.flexibility_scale;
        let power = self.joint.peak_magnitude() * tuning.velocity_scale;
        let stability = if self.position.len() >= tuning.min_stability_samples {
            stability_from_variance(self.position.variance(), tuning.stability_scale)
        } else {
            100.0
        };
        MetricScores::from_raw(flexibility, power, stability)
    }
}

/// Analyzer for any supported drill
#[derive(Debug, Clone)]
pub enum Analyzer {
    /// Squat
    Squat(SquatAnalyzer),
    /// Push-up
    Pushup(PushupAnalyzer),
    /// Basketball free throw
    FreeThrow(FreeThrowAnalyzer),
    /// Tennis serve
    TennisServe(TennisServeAnalyzer),
    /// Cricket bowling
    CricketBowling(CricketBowlingAnalyzer),
    /// Soccer penalty
    SoccerPenalty(SoccerPenaltyAnalyzer),
}

impl Analyzer {
    /// Build the analyzer for `drill` with the given configuration
    #[must_use]
    pub fn new(drill: DrillKind, config: &AnalysisConfig) -> Self {
        match drill {
            DrillKind::Squat => Self::Squat(SquatAnalyzer::new(config)),
            DrillKind::Pushup => Self::Pushup(PushupAnalyzer::new(config)),
            DrillKind::BasketballFreeThrow => Self::FreeThrow(FreeThrowAnalyzer::new(config)),
            DrillKind::TennisServe => Self::TennisServe(TennisServeAnalyzer::new(config)),
            DrillKind::CricketBowling => Self::CricketBowling(CricketBowlingAnalyzer::new(config)),
            DrillKind::SoccerPenalty => Self::SoccerPenalty(SoccerPenaltyAnalyzer::new(config)),
        }
    }

    fn as_dyn(&self) -> &dyn DrillAnalyzer {
        match self {
            Self::Squat(a) => a,
            Self::Pushup(a) => a,
            Self::FreeThrow(a) => a,
            Self::TennisServe(a) => a,
            Self::CricketBowling(a) => a,
            Self::SoccerPenalty(a) => a,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn DrillAnalyzer {
        match self {
            Self::Squat(a) => a,
            Self::Pushup(a) => a,
            Self::FreeThrow(a) => a,
            Self::TennisServe(a) => a,
            Self::CricketBowling(a) => a,
            Self::SoccerPenalty(a) => a,
        }
    }
}

impl DrillAnalyzer for Analyzer {
    fn drill(&self) -> DrillKind {
        self.as_dyn().drill()
    }

    fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) {
        self.as_dyn_mut().process_frame(frame, timestamp_ms);
    }

    fn frames_processed(&self) -> u64 {
        self.as_dyn().frames_processed()
    }

    fn scores(&self) -> MetricScores {
        self.as_dyn().scores()
    }

    fn results(&self) -> DrillResult {
        self.as_dyn().results()
    }
}
