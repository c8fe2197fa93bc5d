// ABOUTME: Benchmark fixtures generating synthetic pose sessions
// ABOUTME: Every landmark oscillates deterministically so analyzers see real motion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic pose data for reproducible performance measurements.

use drillsense::replay::RecordedFrame;
use drillsense::{Frame, Keypoint};

/// Capture interval of a 30 fps camera
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 30.0;

/// Predefined session lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SessionLength {
    /// Three seconds of capture
    Short,
    /// Thirty seconds of capture
    Long,
}

impl SessionLength {
    #[must_use]
    pub const fn frames(self) -> usize {
        match self {
            Self::Short => 90,
            Self::Long => 900,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

/// One full-body frame; each landmark circles its anchor at its own phase
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_frame(index: usize) -> Frame {
    let t = index as f64 * 0.15;
    Frame::from_pose((0..17).map(|slot| {
        let slot = slot as f64;
        let anchor_x = 40.0_f64.mul_add(slot % 4.0, 200.0);
        let anchor_y = 25.0_f64.mul_add(slot, 60.0);
        Keypoint::new(
            30.0_f64.mul_add((t + slot).sin(), anchor_x),
            45.0_f64.mul_add(t.mul_add(0.7, slot).cos(), anchor_y),
            0.85,
        )
    }))
}

/// A session of `length` frames with capture timestamps
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_session(length: SessionLength) -> Vec<RecordedFrame> {
    (0..length.frames())
        .map(|index| RecordedFrame {
            timestamp: index as f64 * FRAME_INTERVAL_MS,
            keypoints: generate_frame(index),
        })
        .collect()
}

/// The session serialized as JSON Lines
#[must_use]
pub fn session_jsonl(frames: &[RecordedFrame]) -> String {
    frames
        .iter()
        .filter_map(|frame| serde_json::to_string(frame).ok())
        .collect::<Vec<_>>()
        .join("\n")
}
