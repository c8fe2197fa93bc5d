// ABOUTME: Threshold-band classification of metric scores and coaching-text synthesis
// ABOUTME: Deterministic mapping from (drill, scores) to an ordered list of feedback strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback synthesis
//!
//! Each metric is classified into a [`ScoreBand`] and rendered with drill
//! vocabulary. The output order is fixed: flexibility, power, stability, the
//! overall tip, then one technique cue for the drill. The list is truncated to
//! the configured maximum.

use std::fmt;

use drillsense_core::{DrillKind, MetricScores};
use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;

/// Qualitative band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Below the "fair" threshold
    NeedsWork,
    /// At or above "fair"
    Fair,
    /// At or above "good"
    Good,
    /// At or above "excellent"
    Excellent,
}

impl ScoreBand {
    /// Classify a score against configured thresholds
    #[must_use]
    pub const fn classify(score: u8, bands: &FeedbackConfig) -> Self {
        if score >= bands.excellent {
            Self::Excellent
        } else if score >= bands.good {
            Self::Good
        } else if score >= bands.fair {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsWork => "needs work",
        })
    }
}

/// One of the three scored metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Range of motion
    Flexibility,
    /// Velocity
    Power,
    /// Positional steadiness
    Stability,
}

impl Metric {
    /// Metrics in feedback order
    pub const ALL: [Self; 3] = [Self::Flexibility, Self::Power, Self::Stability];

    const fn score(self, scores: &MetricScores) -> u8 {
        match self {
            Self::Flexibility => scores.flexibility,
            Self::Power => scores.power,
            Self::Stability => scores.stability,
        }
    }
}

/// What a metric means for one drill and how to improve it
struct MetricPhrase {
    subject: &'static str,
    improve: &'static str,
}

struct DrillVocabulary {
    flexibility: MetricPhrase,
    power: MetricPhrase,
    stability: MetricPhrase,
    technique: &'static str,
}

impl DrillVocabulary {
    const fn phrase(&self, metric: Metric) -> &MetricPhrase {
        match metric {
            Metric::Flexibility => &self.flexibility,
            Metric::Power => &self.power,
            Metric::Stability => &self.stability,
        }
    }
}

const SQUAT: DrillVocabulary = DrillVocabulary {
    flexibility: MetricPhrase {
        subject: "squat depth",
        improve: "Try to sit a little deeper while keeping your heels down.",
    },
    power: MetricPhrase {
        subject: "drive out of the bottom",
        improve: "Push the floor away faster on the way up.",
    },
    stability: MetricPhrase {
        subject: "hip control",
        improve: "Keep your core braced so your hips stay steady.",
    },
    technique: "Keep your chest up and track your knees over your toes.",
};

const PUSHUP: DrillVocabulary = DrillVocabulary {
    flexibility: MetricPhrase {
        subject: "push-up range of motion",
        improve: "Lower your chest closer to the floor on each rep.",
    },
    power: MetricPhrase {
        subject: "pressing power",
        improve: "Drive up explosively through the upward phase.",
    },
    stability: MetricPhrase {
        subject: "body alignment",
        improve: "Hold a straight line from shoulders to heels.",
    },
    technique: "Keep your elbows tucked and control the descent on every rep.",
};

const FREE_THROW: DrillVocabulary = DrillVocabulary {
    flexibility: MetricPhrase {
        subject: "elbow range through the shot",
        improve: "Load the ball lower and extend fully on release.",
    },
    power: MetricPhrase {
        subject: "release speed",
        improve: "Snap the wrist through the follow-through.",
    },
    stability: MetricPhrase {
        subject: "stance balance",
        improve: "Keep your hips square and still over your base.",
    },
    technique: "Focus on consistent shooting form and follow-through.",
};

const TENNIS_SERVE: DrillVocabulary = DrillVocabulary {
    flexibility: MetricPhrase {
        subject: "shoulder rotation",
        improve: "Let the racket drop further behind your back before swinging up.",
    },
    power: MetricPhrase {
        subject: "racket-hand speed",
        improve: "Accelerate through contact using your legs and core.",
    },
    stability: MetricPhrase {
        subject: "head stability",
        improve: "Keep your eyes and head still on the toss.",
    },
    technique: "Focus on your toss consistency and service motion.",
};

const CRICKET_BOWLING: DrillVocabulary = DrillVocabulary {
    flexibility: MetricPhrase {
        subject: "shoulder rotation",
        improve: "Counter-rotate your shoulders more against your hips at delivery.",
    },
    power: MetricPhrase {
        subject: "arm speed",
        improve: "Whip the bowling arm through faster at release.",
    },
    stability: MetricPhrase {
        subject: "head stability",
        improve: "Keep your head level through the delivery stride.",
    },
    technique: "Work on your run-up rhythm and delivery stride.",
};

const SOCCER_PENALTY: DrillVocabulary = DrillVocabulary {
    flexibility: MetricPhrase {
        subject: "kicking-leg backswing",
        improve: "Bend the kicking knee more on the backswing.",
    },
    power: MetricPhrase {
        subject: "hip drive",
        improve: "Drive your hips through the ball on contact.",
    },
    stability: MetricPhrase {
        subject: "upper-body balance",
        improve: "Keep your torso steady over the plant foot.",
    },
    technique: "Practice your approach and follow-through technique.",
};

const fn vocabulary(drill: DrillKind) -> &'static DrillVocabulary {
    match drill {
        DrillKind::Squat => &SQUAT,
        DrillKind::Pushup => &PUSHUP,
        DrillKind::BasketballFreeThrow => &FREE_THROW,
        DrillKind::TennisServe => &TENNIS_SERVE,
        DrillKind::CricketBowling => &CRICKET_BOWLING,
        DrillKind::SoccerPenalty => &SOCCER_PENALTY,
    }
}

/// Technique cue appended after the scored feedback for a drill
#[must_use]
pub const fn technique_tip(drill: DrillKind) -> &'static str {
    vocabulary(drill).technique
}

/// Tip derived from the overall score
#[must_use]
pub const fn overall_tip(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => {
            "Outstanding performance! Your technique is excellent across all metrics."
        }
        ScoreBand::Good => "Great job! Focus on your weakest area to reach the next level.",
        ScoreBand::Fair => {
            "Good foundation! Focus on proper form and technique before increasing intensity."
        }
        ScoreBand::NeedsWork => "Keep practicing! Focus on proper form and gradual progression.",
    }
}

fn metric_line(phrase: &MetricPhrase, band: ScoreBand) -> String {
    let MetricPhrase { subject, improve } = phrase;
    match band {
        ScoreBand::Excellent => format!("Excellent {subject}! This is a real strength."),
        ScoreBand::Good => format!("Good {subject}. {improve}"),
        ScoreBand::Fair => format!("Fair {subject}. {improve}"),
        ScoreBand::NeedsWork => format!("Your {subject} needs work. {improve}"),
    }
}

/// Turns finalized scores into coaching text
#[derive(Debug, Clone, Copy)]
pub struct FeedbackSynthesizer<'a> {
    config: &'a FeedbackConfig,
}

impl<'a> FeedbackSynthesizer<'a> {
    /// Create a synthesizer bound to a set of band thresholds
    #[must_use]
    pub const fn new(config: &'a FeedbackConfig) -> Self {
        Self { config }
    }

    /// Band for a single score
    #[must_use]
    pub const fn band(&self, score: u8) -> ScoreBand {
        ScoreBand::classify(score, self.config)
    }

    /// Ordered feedback for a drill's scores
    #[must_use]
    pub fn synthesize(&self, drill: DrillKind, scores: &MetricScores) -> Vec<String> {
        let vocabulary = vocabulary(drill);

        let mut lines: Vec<String> = Metric::ALL
            .iter()
            .map(|&metric| metric_line(vocabulary.phrase(metric), self.band(metric.score(scores))))
            .collect();
        lines.push(overall_tip(self.band(scores.overall())).to_owned());
        lines.push(vocabulary.technique.to_owned());

        lines.truncate(self.config.max_items);
        lines
    }
}
