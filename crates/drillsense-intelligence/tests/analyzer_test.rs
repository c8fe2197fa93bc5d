// ABOUTME: End-to-end tests for the per-drill analyzers
// ABOUTME: Feeds synthetic pose sequences and checks scores, frame counts, and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    kp, pushup_pose, right_squat_pose, squat_pose, squat_sweep, unsmoothed_config,
    FRAME_INTERVAL_MS,
};
use drillsense_core::{BodyPart, DrillKind, Frame, Keypoint, MetricScores};
use drillsense_intelligence::analyzers::SquatAnalyzer;
use drillsense_intelligence::{
    create_analyzer_with_config, AnalysisConfig, DominantSide, DrillAnalyzer,
};
use std::iter::repeat_with;

fn feed(analyzer: &mut impl DrillAnalyzer, frames: impl IntoIterator<Item = Frame>) {
    for (i, frame) in frames.into_iter().enumerate() {
        analyzer.process_frame(&frame, i as f64 * FRAME_INTERVAL_MS);
    }
}

#[test]
fn test_squat_sweep_end_to_end() {
    let config = AnalysisConfig::default();
    let mut analyzer = create_analyzer_with_config(DrillKind::Squat, &config);
    feed(&mut analyzer, squat_sweep().into_iter().map(squat_pose));

    let result = analyzer.results();
    assert_eq!(result.drill_type, DrillKind::Squat);
    assert_eq!(result.total_frames, 30);
    assert_eq!(result.flexibility, 100);
    assert_eq!(result.stability, 100);
    assert_eq!(result.power, 0);
    assert_eq!(result.score, 67);
    assert_eq!(
        result.feedback.first().map(String::as_str),
        Some("Excellent squat depth! This is a real strength.")
    );
}

#[test]
fn test_squat_depth_formula_without_smoothing() {
    let config = unsmoothed_config();
    let mut analyzer = SquatAnalyzer::new(&config);
    feed(&mut analyzer, [170.0, 150.0, 145.0, 160.0].map(squat_pose));

    let min = analyzer.min_knee_angle().unwrap();
    assert!((min - 145.0).abs() < 1e-6);
    // (180 - 145) * 100 / 90
    assert_eq!(analyzer.scores().flexibility, 39);
}

#[test]
fn test_shallow_squat_is_not_praised_for_depth() {
    let config = unsmoothed_config();
    let mut analyzer = create_analyzer_with_config(DrillKind::Squat, &config);
    let down = (0..=23).map(|i| 2.0_f64.mul_add(-f64::from(i), 180.0));
    let up = (0..=23).map(|i| 2.0_f64.mul_add(f64::from(i), 134.0));
    feed(&mut analyzer, down.chain(up).map(squat_pose));

    let result = analyzer.results();
    // (180 - 134) * 100 / 90
    assert_eq!(result.flexibility, 51);
    assert!(result
        .feedback
        .iter()
        .all(|line| !line.starts_with("Excellent squat depth")));
    assert_eq!(
        result.feedback.first().map(String::as_str),
        Some("Your squat depth needs work. Try to sit a little deeper while keeping your heels down.")
    );
}

#[test]
fn test_parallel_squat_earns_full_depth() {
    let config = unsmoothed_config();
    let mut analyzer = create_analyzer_with_config(DrillKind::Squat, &config);
    feed(&mut analyzer, [180.0, 135.0, 90.0, 135.0, 180.0].map(squat_pose));
    assert_eq!(analyzer.scores().flexibility, 100);
}

#[test]
fn test_extrema_survive_rejected_frames() {
    for smoothing in [false, true] {
        let mut config = AnalysisConfig::default();
        config.smoothing.enabled = smoothing;
        let mut analyzer = create_analyzer_with_config(DrillKind::Squat, &config);
        feed(&mut analyzer, squat_sweep().into_iter().map(squat_pose));
        let before = analyzer.scores().flexibility;
        assert!(before > 0);

        let dim = |knee: f64| {
            let mut frame = squat_pose(knee);
            for part in [BodyPart::LeftHip, BodyPart::LeftKnee, BodyPart::LeftAnkle] {
                let point = *frame.get(part).unwrap();
                frame.set(part, Some(Keypoint::new(point.x, point.y, 0.1)));
            }
            frame
        };
        for i in 0..34 {
            let frame = if i % 2 == 0 { Frame::empty() } else { dim(170.0) };
            analyzer.process_frame(&frame, f64::from(30 + i) * FRAME_INTERVAL_MS);
        }

        assert_eq!(analyzer.scores().flexibility, before, "smoothing={smoothing}");
        assert_eq!(analyzer.frames_processed(), 64);
    }
}

#[test]
fn test_squat_hip_sway_lowers_stability_once_window_fills() {
    let config = unsmoothed_config();
    let mut analyzer = SquatAnalyzer::new(&config);
    let swaying = (0..10).map(|i| {
        let offset = if i % 2 == 0 { 40.0 } else { 0.0 };
        squat_pose(120.0).with(BodyPart::LeftShoulder, kp(200.0 + offset, 100.0))
    });

    let frames: Vec<Frame> = swaying.collect();
    feed(&mut analyzer, frames[..5].iter().cloned());
    assert_eq!(analyzer.scores().stability, 100);

    feed(&mut analyzer, frames[5..].iter().cloned());
    assert!(analyzer.scores().stability < 100);
}

#[test]
fn test_squat_power_from_hip_rise() {
    let config = unsmoothed_config();
    let mut analyzer = SquatAnalyzer::new(&config);
    let hip_heights = [200.0, 200.0, 180.0];
    for (i, y) in hip_heights.into_iter().enumerate() {
        let frame = squat_pose(120.0).with(BodyPart::LeftHip, kp(200.0, y));
        analyzer.process_frame(&frame, i as f64 * 100.0);
    }
    // 20 px in 100 ms = 200 px/s, scaled by 0.5
    assert_eq!(analyzer.scores().power, 100);
}

#[test]
fn test_empty_session_has_neutral_defaults() {
    let config = AnalysisConfig::default();
    for drill in DrillKind::ALL {
        let analyzer = create_analyzer_with_config(drill, &config);
        let result = analyzer.results();

        assert_eq!(result.drill_type, drill);
        assert_eq!(result.total_frames, 0);
        assert_eq!(
            result.scores(),
            MetricScores {
                flexibility: 0,
                power: 0,
                stability: 100,
            },
            "{drill}"
        );
        assert_eq!(result.score, 33);
        assert!(!result.feedback.is_empty());
    }
}

#[test]
fn test_frames_without_landmarks_still_count() {
    let config = AnalysisConfig::default();
    for drill in DrillKind::ALL {
        let mut analyzer = create_analyzer_with_config(drill, &config);
        feed(&mut analyzer, repeat_with(Frame::empty).take(7));
        assert_eq!(analyzer.frames_processed(), 7);
        assert_eq!(analyzer.results().total_frames, 7);
    }
}

#[test]
fn test_results_is_a_pure_read() {
    let config = AnalysisConfig::default();
    let mut analyzer = create_analyzer_with_config(DrillKind::Squat, &config);
    feed(&mut analyzer, squat_sweep().into_iter().take(10).map(squat_pose));

    let first = analyzer.results();
    let second = analyzer.results();
    assert_eq!(first, second);
    assert_eq!(analyzer.frames_processed(), 10);
}

#[test]
fn test_scores_stay_bounded_under_hostile_input() {
    let config = AnalysisConfig::default();
    let wild = |i: u32| {
        let v = if i % 2 == 0 { 1e12 } else { -1e12 };
        let mut frame = Frame::from_pose((0..17).map(|_| Keypoint::new(v, -v, 0.95)));
        if i % 3 == 0 {
            frame.set(BodyPart::Nose, Some(Keypoint::new(f64::NAN, f64::INFINITY, 1.0)));
        }
        frame
    };

    for drill in DrillKind::ALL {
        let mut analyzer = create_analyzer_with_config(drill, &config);
        for i in 0..40 {
            // stalled and backwards clocks included
            let ts = f64::from(i / 2) * 10.0 - f64::from(i % 3);
            analyzer.process_frame(&wild(i), ts);
        }
        let result = analyzer.results();
        for score in [result.flexibility, result.power, result.stability, result.score] {
            assert!(score <= 100, "{drill}: {score}");
        }
        assert_eq!(result.total_frames, 40);
    }
}

#[test]
fn test_pushup_range_extension_and_consistency() {
    let config = unsmoothed_config();
    let mut analyzer = create_analyzer_with_config(DrillKind::Pushup, &config);
    let down = (0..10).map(|i| 10.0_f64.mul_add(-f64::from(i), 170.0));
    let up = (1..10).map(|i| 10.0_f64.mul_add(f64::from(i), 80.0));
    feed(&mut analyzer, down.chain(up).map(pushup_pose));

    let scores = analyzer.scores();
    // 90 degrees of travel
    assert_eq!(scores.flexibility, 100);
    // extension saturates at 100, hip is motionless
    assert_eq!(scores.power, 50);
    assert_eq!(scores.stability, 0);
}

#[test]
fn test_pushup_steady_hold_is_stable() {
    let config = unsmoothed_config();
    let mut analyzer = create_analyzer_with_config(DrillKind::Pushup, &config);
    feed(&mut analyzer, repeat_with(|| pushup_pose(100.0)).take(12));

    let scores = analyzer.scores();
    assert_eq!(scores.flexibility, 0);
    assert_eq!(scores.stability, 100);
    // 100 * 0.8 extension, no hip motion
    assert_eq!(scores.power, 40);
}

fn thrower(wrist_x: f64) -> Frame {
    Frame::empty()
        .with(BodyPart::LeftShoulder, kp(100.0, 100.0))
        .with(BodyPart::LeftElbow, kp(100.0, 200.0))
        .with(BodyPart::LeftWrist, kp(wrist_x, 200.0))
        .with(BodyPart::RightShoulder, kp(200.0, 100.0))
        .with(BodyPart::RightElbow, kp(200.0, 200.0))
        .with(BodyPart::RightWrist, kp(wrist_x + 100.0, 200.0))
        .with(BodyPart::LeftHip, kp(120.0, 300.0))
        .with(BodyPart::RightHip, kp(180.0, 300.0))
        .with(BodyPart::Nose, kp(150.0, 50.0))
}

#[test]
fn test_sport_drills_score_peak_wrist_speed() {
    let config = unsmoothed_config();
    for drill in [
        DrillKind::BasketballFreeThrow,
        DrillKind::TennisServe,
        DrillKind::CricketBowling,
    ] {
        let mut analyzer = create_analyzer_with_config(drill, &config);
        for i in 0..6 {
            // 5 px per 100 ms
            analyzer.process_frame(&thrower(5.0_f64.mul_add(f64::from(i), 150.0)), f64::from(i) * 100.0);
        }
        let scores = analyzer.scores();
        assert_eq!(scores.power, 50, "{drill}");
        assert_eq!(scores.stability, 100, "{drill}");
    }
}

#[test]
fn test_soccer_penalty_backswing_and_hip_drive() {
    let config = unsmoothed_config();
    let mut analyzer = create_analyzer_with_config(DrillKind::SoccerPenalty, &config);
    for (i, (knee, hip_x)) in [(180.0, 200.0), (135.0, 200.0), (160.0, 230.0)]
        .into_iter()
        .enumerate()
    {
        let frame = right_squat_pose(knee).with(BodyPart::RightHip, kp(hip_x, 200.0));
        analyzer.process_frame(&frame, i as f64 * 1000.0);
    }
    let scores = analyzer.scores();
    // (180 - 135) * 100 / 90
    assert_eq!(scores.flexibility, 50);
    // 30 px in one second
    assert_eq!(scores.power, 30);
}

#[test]
fn test_dominant_side_selects_landmarks() {
    let left_config = unsmoothed_config();
    let mut left = create_analyzer_with_config(DrillKind::Squat, &left_config);
    feed(&mut left, [180.0, 90.0].map(right_squat_pose));
    assert_eq!(left.scores().flexibility, 0);

    let mut right_config = unsmoothed_config();
    right_config.drills.squat.dominant_side = DominantSide::Right;
    let mut right = create_analyzer_with_config(DrillKind::Squat, &right_config);
    feed(&mut right, [180.0, 90.0].map(right_squat_pose));
    assert_eq!(right.scores().flexibility, 100);
}

#[test]
fn test_low_confidence_landmarks_are_ignored() {
    let config = unsmoothed_config();
    let mut analyzer = create_analyzer_with_config(DrillKind::Squat, &config);
    let mut frame = squat_pose(90.0);
    let knee = *frame.get(BodyPart::LeftKnee).unwrap();
    frame.set(BodyPart::LeftKnee, Some(Keypoint::new(knee.x, knee.y, 0.05)));
    analyzer.process_frame(&frame, 0.0);

    assert_eq!(analyzer.frames_processed(), 1);
    assert_eq!(analyzer.scores().flexibility, 0);
}
