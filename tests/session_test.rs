// ABOUTME: Integration tests for the practice session lifecycle
// ABOUTME: Covers auth gating, drill validation, phase transitions, and refusal after finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::squat_pose;
use drillsense::intelligence::AnalysisConfig;
use drillsense::session::{AuthSignal, PracticeSession, SessionPhase};
use drillsense::{DrillKind, ErrorCode, Frame};

struct SignedOut;

impl AuthSignal for SignedOut {
    fn is_session_active(&self) -> bool {
        false
    }
}

#[test]
fn test_start_requires_active_sign_in() {
    let error = PracticeSession::start("squat", &SignedOut, "athlete-1").unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);

    let error = PracticeSession::start("squat", &false, "athlete-1").unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
}

#[test]
fn test_auth_is_checked_before_drill() {
    let error = PracticeSession::start("curling", &false, "athlete-1").unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
}

#[test]
fn test_unknown_drill_is_rejected() {
    let error = PracticeSession::start("curling", &true, "athlete-1").unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownDrill);
}

#[test]
fn test_phases_follow_lifecycle() {
    let mut session = PracticeSession::start("squat", &true, "athlete-1").unwrap();
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.drill(), DrillKind::Squat);
    assert_eq!(session.user_id(), "athlete-1");

    session.process_frame(&squat_pose(170.0), 0.0).unwrap();
    session.process_frame(&squat_pose(120.0), 33.0).unwrap();
    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(session.frames_processed(), 2);

    let record = session.finish().unwrap();
    assert_eq!(session.phase(), SessionPhase::Finished);
    assert_eq!(record.id, session.id());
    assert_eq!(record.user_id, "athlete-1");
    assert_eq!(record.drill, DrillKind::Squat);
    assert_eq!(record.result.total_frames, 2);
    assert!(record.finished_at >= record.started_at);
}

#[test]
fn test_frames_after_finish_are_refused() {
    let mut session = PracticeSession::start("pushup", &true, "athlete-2").unwrap();
    session.process_frame(&Frame::empty(), 0.0).unwrap();
    session.finish().unwrap();

    let error = session.process_frame(&Frame::empty(), 33.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::SessionNotActive);
    assert_eq!(session.frames_processed(), 1);
}

#[test]
fn test_finish_twice_is_refused() {
    let mut session = PracticeSession::start("tennis_serve", &true, "athlete-3").unwrap();
    session.finish().unwrap();

    let error = session.finish().unwrap_err();
    assert_eq!(error.code, ErrorCode::SessionNotActive);
}

#[test]
fn test_preview_does_not_end_session() {
    let mut config = AnalysisConfig::default();
    config.smoothing.enabled = false;
    let mut session =
        PracticeSession::start_with_config(DrillKind::Squat, &true, "athlete-4", &config).unwrap();
    session.process_frame(&squat_pose(180.0), 0.0).unwrap();
    session.process_frame(&squat_pose(135.0), 33.0).unwrap();

    let preview = session.preview();
    // (180 - 135) * 100 / 90
    assert_eq!(preview.flexibility, 50);
    assert_ne!(session.phase(), SessionPhase::Finished);

    let record = session.finish().unwrap();
    assert_eq!(record.result, preview);
}

#[test]
fn test_empty_session_finishes_with_defaults() {
    let mut session = PracticeSession::start("soccer_penalty", &true, "athlete-5").unwrap();
    let record = session.finish().unwrap();

    assert_eq!(record.result.total_frames, 0);
    assert_eq!(record.result.flexibility, 0);
    assert_eq!(record.result.power, 0);
    assert_eq!(record.result.stability, 100);
    assert_eq!(record.result.score, 33);
}

#[test]
fn test_sessions_get_distinct_ids() {
    let first = PracticeSession::start("squat", &true, "athlete-6").unwrap();
    let second = PracticeSession::start("squat", &true, "athlete-6").unwrap();
    assert_ne!(first.id(), second.id());
}
