// ABOUTME: Closed enumeration of drills the analysis core can score
// ABOUTME: Parses drill identifiers strictly and rejects anything outside the enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Exercise or sport movement scored by one analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillKind {
    /// Lower-body flexion (squat)
    Squat,
    /// Upper-body push (push-up)
    Pushup,
    /// Overhead shot (basketball free throw)
    BasketballFreeThrow,
    /// Overhead throw (tennis serve)
    TennisServe,
    /// Rotational delivery (cricket bowling)
    CricketBowling,
    /// Lower-body kick (soccer penalty)
    SoccerPenalty,
}

impl DrillKind {
    /// Every supported drill
    pub const ALL: [Self; 6] = [
        Self::Squat,
        Self::Pushup,
        Self::BasketballFreeThrow,
        Self::TennisServe,
        Self::CricketBowling,
        Self::SoccerPenalty,
    ];

    /// Stable identifier used on the wire and by the factory
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Pushup => "pushup",
            Self::BasketballFreeThrow => "basketball_free_throw",
            Self::TennisServe => "tennis_serve",
            Self::CricketBowling => "cricket_bowling",
            Self::SoccerPenalty => "soccer_penalty",
        }
    }

    /// Human-readable drill name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Pushup => "Push-up",
            Self::BasketballFreeThrow => "Basketball Free Throw",
            Self::TennisServe => "Tennis Serve",
            Self::CricketBowling => "Cricket Bowling",
            Self::SoccerPenalty => "Soccer Penalty",
        }
    }
}

impl fmt::Display for DrillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DrillKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|drill| drill.id() == normalized)
            .ok_or_else(|| AppError::unknown_drill(s))
    }
}
