// ABOUTME: Fixed-layout keypoint frame indexed by body part
// ABOUTME: Absent landmarks are empty slots; low-confidence ones can be filtered on access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::keypoint::{BodyPart, Keypoint};
use crate::constants::pose::KEYPOINT_COUNT;

/// One full set of landmarks for a single instant
///
/// Serializes as a JSON array of 17 entries where a missing landmark is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    keypoints: [Option<Keypoint>; KEYPOINT_COUNT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::empty()
    }
}

impl Frame {
    /// Frame with every landmark missing
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            keypoints: [None; KEYPOINT_COUNT],
        }
    }

    /// Build a frame from raw pose-model output where position is the slot index
    ///
    /// Entries past the 17-point layout are ignored; a short list leaves the
    /// trailing slots empty.
    #[must_use]
    pub fn from_pose(keypoints: impl IntoIterator<Item = Keypoint>) -> Self {
        let mut frame = Self::empty();
        for (slot, keypoint) in frame.keypoints.iter_mut().zip(keypoints) {
            *slot = Some(keypoint);
        }
        frame
    }

    /// Landmark observation, regardless of confidence
    #[must_use]
    pub const fn get(&self, part: BodyPart) -> Option<&Keypoint> {
        self.keypoints[part.index()].as_ref()
    }

    /// Landmark observation only if it clears the confidence threshold
    #[must_use]
    pub fn confident(&self, part: BodyPart) -> Option<&Keypoint> {
        self.get(part).filter(|kp| kp.is_confident())
    }

    /// Replace a landmark slot
    pub fn set(&mut self, part: BodyPart, keypoint: Option<Keypoint>) {
        self.keypoints[part.index()] = keypoint;
    }

    /// Builder-style variant of [`Frame::set`] for a present landmark
    #[must_use]
    pub fn with(mut self, part: BodyPart, keypoint: Keypoint) -> Self {
        self.set(part, Some(keypoint));
        self
    }

    /// Midpoint of two confident landmarks
    ///
    /// The returned keypoint carries the lower of the two scores.
    #[must_use]
    pub fn midpoint(&self, a: BodyPart, b: BodyPart) -> Option<Keypoint> {
        let first = self.confident(a)?;
        let second = self.confident(b)?;
        Some(Keypoint::new(
            (first.x + second.x) / 2.0,
            (first.y + second.y) / 2.0,
            first.score.min(second.score),
        ))
    }

    /// Number of landmarks that clear the confidence threshold
    #[must_use]
    pub fn confident_count(&self) -> usize {
        self.keypoints
            .iter()
            .flatten()
            .filter(|kp| kp.is_confident())
            .count()
    }

    /// Iterate over `(part, observation)` for present landmarks
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, &Keypoint)> {
        BodyPart::ALL
            .iter()
            .zip(self.keypoints.iter())
            .filter_map(|(part, slot)| slot.as_ref().map(|kp| (*part, kp)))
    }
}

impl FromIterator<(BodyPart, Keypoint)> for Frame {
    fn from_iter<I: IntoIterator<Item = (BodyPart, Keypoint)>>(iter: I) -> Self {
        let mut frame = Self::empty();
        for (part, keypoint) in iter {
            frame.set(part, Some(keypoint));
        }
        frame
    }
}
