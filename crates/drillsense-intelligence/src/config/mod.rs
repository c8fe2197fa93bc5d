// ABOUTME: Analysis configuration for smoothing, feedback bands, and per-drill tuning tables
// ABOUTME: Environment-overridable, validated, and cached globally for the analyzer factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration
//!
//! Every constant an analyzer uses to turn measurements into scores lives in a
//! [`DrillTuning`] entry, so the camera-dependent velocity calibration can be
//! adjusted without touching analyzer code.
//!
//! Environment overrides:
//! - `DRILLSENSE_SMOOTHING_ENABLED` - `true`/`false`
//! - `DRILLSENSE_SMOOTHING_ALPHA` - blend factor in (0, 1]
//! - `DRILLSENSE_VELOCITY_SCALE` - multiplier applied to every drill's velocity scale
//! - `DRILLSENSE_DOMINANT_SIDE` - `left`/`right`, applied to every drill
//! - `DRILLSENSE_FEEDBACK_MAX_ITEMS` - feedback lines per result

pub mod error;

pub use error::ConfigError;

use drillsense_core::constants::{drills, scoring, smoothing};
use drillsense_core::{BodyPart, DrillKind};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYSIS_CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();

/// Body side an analyzer reads one-sided joints from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantSide {
    /// Left-side landmarks
    Left,
    /// Right-side landmarks
    Right,
}

impl DominantSide {
    /// Pick the landmark on this side
    #[must_use]
    pub const fn pick(self, left: BodyPart, right: BodyPart) -> BodyPart {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }

    /// The other side
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for DominantSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for DominantSide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(ConfigError::Parse(format!("Invalid dominant side: {other}"))),
        }
    }
}

/// Keypoint smoothing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Whether analyzers smooth frames before measuring
    pub enabled: bool,
    /// Exponential moving average blend factor
    pub alpha: f64,
    /// Smoothed frames retained per analyzer
    pub history_frames: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            alpha: smoothing::DEFAULT_ALPHA,
            history_frames: smoothing::DEFAULT_HISTORY_FRAMES,
        }
    }
}

/// Score bands used by feedback synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Minimum score for the "excellent" band
    pub excellent: u8,
    /// Minimum score for the "good" band
    pub good: u8,
    /// Minimum score for the "fair" band
    pub fair: u8,
    /// Feedback lines returned per result
    pub max_items: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            excellent: scoring::EXCELLENT_THRESHOLD,
            good: scoring::GOOD_THRESHOLD,
            fair: scoring::FAIR_THRESHOLD,
            max_items: scoring::DEFAULT_MAX_FEEDBACK_ITEMS,
        }
    }
}

/// Scoring constants for one drill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillTuning {
    /// Score points per degree of range of motion
    pub flexibility_scale: f64,
    /// Score points per pixel/second of tracked joint velocity
    pub velocity_scale: f64,
    /// Multiplier `k` in `stability = 100 - k * variance`
    pub stability_scale: f64,
    /// Samples kept for the stability variance
    pub stability_window: usize,
    /// Samples required before the variance is trusted
    pub min_stability_samples: usize,
    /// Samples kept for velocity averaging
    pub velocity_window: usize,
    /// Side one-sided joints are read from
    pub dominant_side: DominantSide,
}

impl DrillTuning {
    /// Tuning for a drill whose range-of-motion score saturates at 90 degrees of travel
    fn sport(dominant_side: DominantSide) -> Self {
        Self {
            flexibility_scale: 100.0 / scoring::FULL_RANGE_DEGREES,
            velocity_scale: 1.0,
            stability_scale: drills::SPORT_STABILITY_SCALE,
            stability_window: drills::SPORT_STABILITY_WINDOW,
            min_stability_samples: 1,
            velocity_window: drills::SPORT_VELOCITY_WINDOW,
            dominant_side,
        }
    }

    fn squat() -> Self {
        Self {
            flexibility_scale: 100.0 / scoring::FULL_RANGE_DEGREES,
            velocity_scale: drills::SQUAT_VELOCITY_SCALE,
            stability_scale: drills::SQUAT_STABILITY_SCALE,
            stability_window: drills::SQUAT_STABILITY_WINDOW,
            min_stability_samples: drills::SQUAT_MIN_STABILITY_SAMPLES,
            velocity_window: drills::SQUAT_STABILITY_WINDOW,
            dominant_side: DominantSide::Left,
        }
    }

    fn pushup() -> Self {
        Self {
            flexibility_scale: 100.0 / scoring::FULL_RANGE_DEGREES,
            velocity_scale: drills::PUSHUP_VELOCITY_SCALE,
            stability_scale: drills::PUSHUP_STABILITY_SCALE,
            stability_window: drills::PUSHUP_WINDOW,
            min_stability_samples: drills::PUSHUP_MIN_STABILITY_SAMPLES,
            velocity_window: drills::PUSHUP_WINDOW,
            dominant_side: DominantSide::Left,
        }
    }
}

/// One tuning entry per drill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillTuningTable {
    /// Squat tuning
    pub squat: DrillTuning,
    /// Push-up tuning
    pub pushup: DrillTuning,
    /// Basketball free throw tuning
    pub basketball_free_throw: DrillTuning,
    /// Tennis serve tuning
    pub tennis_serve: DrillTuning,
    /// Cricket bowling tuning
    pub cricket_bowling: DrillTuning,
    /// Soccer penalty tuning
    pub soccer_penalty: DrillTuning,
}

impl Default for DrillTuningTable {
    fn default() -> Self {
        Self {
            squat: DrillTuning::squat(),
            pushup: DrillTuning::pushup(),
            basketball_free_throw: DrillTuning::sport(DominantSide::Left),
            tennis_serve: DrillTuning::sport(DominantSide::Right),
            cricket_bowling: DrillTuning::sport(DominantSide::Right),
            soccer_penalty: DrillTuning::sport(DominantSide::Right),
        }
    }
}

impl DrillTuningTable {
    /// Tuning for a drill
    #[must_use]
    pub const fn get(&self, drill: DrillKind) -> &DrillTuning {
        match drill {
            DrillKind::Squat => &self.squat,
            DrillKind::Pushup => &self.pushup,
            DrillKind::BasketballFreeThrow => &self.basketball_free_throw,
            DrillKind::TennisServe => &self.tennis_serve,
            DrillKind::CricketBowling => &self.cricket_bowling,
            DrillKind::SoccerPenalty => &self.soccer_penalty,
        }
    }

    /// Mutable tuning for a drill
    pub fn get_mut(&mut self, drill: DrillKind) -> &mut DrillTuning {
        match drill {
            DrillKind::Squat => &mut self.squat,
            DrillKind::Pushup => &mut self.pushup,
            DrillKind::BasketballFreeThrow => &mut self.basketball_free_throw,
            DrillKind::TennisServe => &mut self.tennis_serve,
            DrillKind::CricketBowling => &mut self.cricket_bowling,
            DrillKind::SoccerPenalty => &mut self.soccer_penalty,
        }
    }
}

/// Main analysis configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Keypoint smoothing
    pub smoothing: SmoothingConfig,
    /// Feedback band thresholds
    pub feedback: FeedbackConfig,
    /// Per-drill scoring constants
    pub drills: DrillTuningTable,
}

impl AnalysisConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first use; invalid overrides fall back
    /// to defaults with a warning.
    pub fn global() -> &'static Self {
        ANALYSIS_CONFIG.get_or_init(|| {
            Self::from_environment().unwrap_or_else(|e| {
                warn!("Failed to load analysis config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the result fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("DRILLSENSE_SMOOTHING_ENABLED", &mut self.smoothing.enabled)?;
        Self::apply_env_var("DRILLSENSE_SMOOTHING_ALPHA", &mut self.smoothing.alpha)?;
        Self::apply_env_var("DRILLSENSE_FEEDBACK_MAX_ITEMS", &mut self.feedback.max_items)?;

        let mut velocity_multiplier = 1.0_f64;
        Self::apply_env_var("DRILLSENSE_VELOCITY_SCALE", &mut velocity_multiplier)?;

        let mut side: Option<DominantSide> = None;
        if let Ok(val) = env::var("DRILLSENSE_DOMINANT_SIDE") {
            side = Some(val.parse()?);
        }

        for drill in DrillKind::ALL {
            let tuning = self.drills.get_mut(drill);
            tuning.velocity_scale *= velocity_multiplier;
            if let Some(side) = side {
                tuning.dominant_side = side;
            }
        }

        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.smoothing.alpha;
        if alpha.is_nan() || alpha <= 0.0 || alpha > 1.0 {
            return Err(ConfigError::InvalidRange(
                "smoothing alpha must be in (0, 1]",
            ));
        }
        if self.smoothing.history_frames == 0 {
            return Err(ConfigError::InvalidWindow(
                "smoothing history_frames must be > 0",
            ));
        }

        let bands = &self.feedback;
        if bands.excellent > scoring::MAX_SCORE {
            return Err(ConfigError::InvalidBands("excellent threshold must be <= 100"));
        }
        if bands.excellent <= bands.good || bands.good <= bands.fair {
            return Err(ConfigError::InvalidBands(
                "thresholds must satisfy excellent > good > fair",
            ));
        }
        if bands.max_items == 0 {
            return Err(ConfigError::InvalidRange("feedback max_items must be > 0"));
        }

        for drill in DrillKind::ALL {
            Self::validate_tuning(self.drills.get(drill))?;
        }
        Ok(())
    }

    fn validate_tuning(tuning: &DrillTuning) -> Result<(), ConfigError> {
        let scales = [
            tuning.flexibility_scale,
            tuning.velocity_scale,
            tuning.stability_scale,
        ];
        if scales.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ConfigError::InvalidRange(
                "drill scales must be finite and non-negative",
            ));
        }
        if tuning.stability_window == 0 || tuning.velocity_window == 0 {
            return Err(ConfigError::InvalidWindow("drill windows must be > 0"));
        }
        if tuning.min_stability_samples > tuning.stability_window {
            return Err(ConfigError::InvalidWindow(
                "min_stability_samples must not exceed stability_window",
            ));
        }
        Ok(())
    }
}
