// ABOUTME: Integration tests for JSON Lines session replay and the drillsense-replay binary
// ABOUTME: Checks line parsing, malformed-line reporting, and end-to-end scoring of a recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::{Cursor, Write};
use std::process::Command;

use common::{squat_recording, to_jsonl};
use drillsense::replay::{parse_line, replay};
use drillsense::{create_analyzer, BodyPart, DrillAnalyzer, DrillKind, DrillResult, ErrorCode};
use tempfile::NamedTempFile;

#[test]
fn test_blank_lines_are_skipped() {
    assert!(parse_line("", 1).unwrap().is_none());
    assert!(parse_line("   \t", 2).unwrap().is_none());
}

#[test]
fn test_parse_line_with_null_slots() {
    let mut slots = vec!["null".to_owned(); 17];
    slots[0] = r#"{"x": 320.0, "y": 88.5, "score": 0.93}"#.to_owned();
    let line = format!(r#"{{"timestamp": 66, "keypoints": [{}]}}"#, slots.join(","));

    let recorded = parse_line(&line, 1).unwrap().unwrap();
    assert!((recorded.timestamp - 66.0).abs() < f64::EPSILON);
    let nose = recorded.keypoints.get(BodyPart::Nose).unwrap();
    assert!((nose.x - 320.0).abs() < f64::EPSILON);
    assert!(recorded.keypoints.get(BodyPart::LeftAnkle).is_none());
}

#[test]
fn test_malformed_line_reports_line_number() {
    let error = parse_line("{not json", 7).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("line 7"));
}

#[test]
fn test_replay_scores_recording() {
    let input = to_jsonl(&squat_recording());
    let mut analyzer = create_analyzer("squat").unwrap();

    let result = replay(Cursor::new(input), &mut analyzer).unwrap();
    assert_eq!(result.drill_type, DrillKind::Squat);
    assert_eq!(result.total_frames, 19);
    // smoothing keeps the tracked minimum near 108 degrees
    assert!((75..=85).contains(&result.flexibility), "{}", result.flexibility);
    assert!(!result.feedback.is_empty());
}

#[test]
fn test_replay_stops_at_first_bad_line() {
    let frames = squat_recording();
    let good = to_jsonl(&frames[..2]);
    let input = format!("{good}\n\n{{\"timestamp\": \"soon\"}}\n{}", to_jsonl(&frames[2..]));
    let mut analyzer = create_analyzer("squat").unwrap();

    let error = replay(Cursor::new(input), &mut analyzer).unwrap_err();
    assert!(error.message.contains("line 4"), "{}", error.message);
    assert_eq!(analyzer.results().total_frames, 2);
}

#[test]
fn test_replay_binary_prints_result_json() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", to_jsonl(&squat_recording())).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_drillsense-replay"))
        .args(["--drill", "squat", "--input"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let result: DrillResult = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.drill_type, DrillKind::Squat);
    assert_eq!(result.total_frames, 19);
}

#[test]
fn test_replay_binary_rejects_unknown_drill() {
    let file = NamedTempFile::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_drillsense-replay"))
        .args(["--drill", "curling", "--input"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("curling"));
}
