// ABOUTME: Body landmark vocabulary and single keypoint observation
// ABOUTME: Defines the fixed 17-point layout shared by every drill analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::pose::MIN_KEYPOINT_CONFIDENCE;

/// Body landmark in the 17-point pose layout
///
/// Discriminants are the slot indices the pose model emits, so
/// `BodyPart::LeftHip as usize == 11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Nose (head reference)
    Nose = 0,
    /// Left eye
    LeftEye = 1,
    /// Right eye
    RightEye = 2,
    /// Left ear
    LeftEar = 3,
    /// Right ear
    RightEar = 4,
    /// Left shoulder
    LeftShoulder = 5,
    /// Right shoulder
    RightShoulder = 6,
    /// Left elbow
    LeftElbow = 7,
    /// Right elbow
    RightElbow = 8,
    /// Left wrist
    LeftWrist = 9,
    /// Right wrist
    RightWrist = 10,
    /// Left hip
    LeftHip = 11,
    /// Right hip
    RightHip = 12,
    /// Left knee
    LeftKnee = 13,
    /// Right knee
    RightKnee = 14,
    /// Left ankle
    LeftAnkle = 15,
    /// Right ankle
    RightAnkle = 16,
}

impl BodyPart {
    /// Every landmark in slot order
    pub const ALL: [Self; 17] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Slot index in a frame
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Landmark for a slot index, `None` past the end of the layout
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Snake-case landmark name as emitted by pose models
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One landmark observation from the pose model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal pixel coordinate (frame-relative)
    pub x: f64,
    /// Vertical pixel coordinate (frame-relative, grows downward)
    pub y: f64,
    /// Model confidence in [0, 1]; missing scores deserialize as 0
    #[serde(default)]
    pub score: f64,
}

impl Keypoint {
    /// Create a keypoint
    #[must_use]
    pub const fn new(x: f64, y: f64, score: f64) -> Self {
        Self { x, y, score }
    }

    /// Whether the observation is reliable enough for geometry
    ///
    /// NaN scores compare false and are therefore never confident.
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.score >= MIN_KEYPOINT_CONFIDENCE
    }

    /// Euclidean pixel distance to another keypoint
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
