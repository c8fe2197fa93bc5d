// ABOUTME: Shared fixtures for root integration tests: synthetic poses and session records
// ABOUTME: Records carry controlled timestamps and scores so history ordering is deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use drillsense::replay::RecordedFrame;
use drillsense::session::SessionRecord;
use drillsense::{BodyPart, DrillKind, DrillResult, Frame, Keypoint, MetricScores};
use uuid::Uuid;

pub fn kp(x: f64, y: f64) -> Keypoint {
    Keypoint::new(x, y, 0.9)
}

/// Left-side squat pose whose knee angle is exactly `knee_degrees`
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

/// A squat recording sweeping the knee 180 -> 90 -> 180 at 30 fps
pub fn squat_recording() -> Vec<RecordedFrame> {
    let down = (0..=9).map(|i| 10.0_f64.mul_add(-f64::from(i), 180.0));
    let up = (1..=9).map(|i| 10.0_f64.mul_add(f64::from(i), 90.0));
    down.chain(up)
        .enumerate()
        .map(|(i, knee)| RecordedFrame {
            timestamp: i as f64 * 33.0,
            keypoints: squat_pose(knee),
        })
        .collect()
}

/// Serialize frames as JSON Lines
pub fn to_jsonl(frames: &[RecordedFrame]) -> String {
    frames
        .iter()
        .map(|frame| serde_json::to_string(frame).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A finished record with uniform metric scores
pub fn record(user_id: &str, drill: DrillKind, score: u8, minutes_after_epoch: i64) -> SessionRecord {
    let started_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
        + Duration::minutes(minutes_after_epoch);
    let scores = MetricScores {
        flexibility: score,
        power: score,
        stability: score,
    };
    SessionRecord {
        id: Uuid::new_v4(),
        user_id: user_id.to_owned(),
        drill,
        started_at,
        finished_at: started_at + Duration::seconds(45),
        result: DrillResult::new(drill, 120, scores, vec!["Keep it up.".to_owned()]),
    }
}
