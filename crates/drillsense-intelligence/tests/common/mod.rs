// ABOUTME: Shared fixtures for intelligence tests: confident keypoints and synthetic joint poses
// ABOUTME: Builds frames whose joint angles are known exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use drillsense_core::{BodyPart, Frame, Keypoint};
use drillsense_intelligence::AnalysisConfig;

pub const FRAME_INTERVAL_MS: f64 = 33.0;

pub fn kp(x: f64, y: f64) -> Keypoint {
    Keypoint::new(x, y, 0.9)
}

pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

/// Config with smoothing off so joint angles reach analyzers unchanged
pub fn unsmoothed_config() -> AnalysisConfig {
    let mut config = AnalysisConfig::default();
    config.smoothing.enabled = false;
    config
}

/// Left-side squat pose whose knee angle is exactly `knee_degrees`
///
/// Shoulder, hip and knee are stacked vertically; the ankle swings around the knee.
pub fn squat_pose(knee_degrees: f64) -> Frame {
    let theta = knee_degrees.to_radians();
    Frame::empty()
        .with(BodyPart::LeftShoulder, kp(200.0, 100.0))
        .with(BodyPart::LeftHip, kp(200.0, 200.0))
        .with(BodyPart::LeftKnee, kp(200.0, 300.0))
        .with(
            BodyPart::LeftAnkle,
            kp(
                100.0_f64.mul_add(theta.sin(), 200.0),
                100.0_f64.mul_add(-theta.cos(), 300.0),
            ),
        )
}

/// Mirror of [`squat_pose`] using right-side landmarks only
pub fn right_squat_pose(knee_degrees: f64) -> Frame {
    let left = squat_pose(knee_degrees);
    let mirror = [
        (BodyPart::LeftShoulder, BodyPart::RightShoulder),
        (BodyPart::LeftHip, BodyPart::RightHip),
        (BodyPart::LeftKnee, BodyPart::RightKnee),
        (BodyPart::LeftAnkle, BodyPart::RightAnkle),
    ];
    let mut frame = Frame::empty();
    for (from, to) in mirror {
        frame.set(to, left.get(from).copied());
    }
    frame
}

/// Left-side push-up pose whose elbow angle is exactly `elbow_degrees`
pub fn pushup_pose(elbow_degrees: f64) -> Frame {
    let theta = elbow_degrees.to_radians();
    Frame::empty()
        .with(BodyPart::LeftShoulder, kp(100.0, 100.0))
        .with(BodyPart::LeftElbow, kp(200.0, 100.0))
        .with(
            BodyPart::LeftWrist,
            kp(
                100.0_f64.mul_add(-theta.cos(), 200.0),
                100.0_f64.mul_add(theta.sin(), 100.0),
            ),
        )
        .with(BodyPart::LeftHip, kp(100.0, 300.0))
}

/// Knee angles sweeping 180 -> 80 -> 180 over 30 frames
pub fn squat_sweep() -> Vec<f64> {
    let down = (0..15).map(|i| 100.0_f64.mul_add(-f64::from(i) / 14.0, 180.0));
    let up = (0..15).map(|i| 100.0_f64.mul_add(f64::from(i) / 14.0, 80.0));
    down.chain(up).collect()
}
