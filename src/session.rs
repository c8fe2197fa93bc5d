// ABOUTME: Practice session lifecycle wrapping one analyzer from start to finalized record
// ABOUTME: Gated on an external auth signal; refuses frames once the session is finished
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Practice sessions
//!
//! A session owns exactly one analyzer. It is started only when the caller's
//! auth collaborator reports an active sign-in, runs while frames arrive, and
//! is finished once to produce a [`SessionRecord`] suitable for a
//! [`ResultStore`](crate::history::ResultStore).

use chrono::{DateTime, Utc};
use drillsense_core::{AppError, AppResult, DrillKind, DrillResult, Frame};
use drillsense_intelligence::{
    create_analyzer, create_analyzer_with_config, AnalysisConfig, Analyzer, DrillAnalyzer,
};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};
use uuid::Uuid;

/// Boolean "is a user signed in" signal supplied by the auth layer
pub trait AuthSignal: Send + Sync {
    /// Whether an authenticated session is active
    fn is_session_active(&self) -> bool;
}

impl AuthSignal for bool {
    fn is_session_active(&self) -> bool {
        *self
    }
}

/// Lifecycle phase of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Started, no frame yet
    Ready,
    /// At least one frame processed
    Running,
    /// Finalized; further frames are refused
    Finished,
}

/// Persistable outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session identifier
    pub id: Uuid,
    /// Owner of the session
    pub user_id: String,
    /// Drill practiced
    pub drill: DrillKind,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session was finished
    pub finished_at: DateTime<Utc>,
    /// Final scores and feedback
    pub result: DrillResult,
}

/// One user's analysis session for one drill
#[derive(Debug)]
pub struct PracticeSession {
    id: Uuid,
    user_id: String,
    started_at: DateTime<Utc>,
    phase: SessionPhase,
    analyzer: Analyzer,
}

impl PracticeSession {
    /// Start a session for `drill_id` using the global analysis configuration
    ///
    /// # Errors
    ///
    /// Returns `AUTH_REQUIRED` when `auth` reports no active sign-in, or
    /// `UNKNOWN_DRILL` when `drill_id` is not a supported drill
    pub fn start(
        drill_id: &str,
        auth: &dyn AuthSignal,
        user_id: impl Into<String>,
    ) -> AppResult<Self> {
        Self::require_auth(auth)?;
        let analyzer = create_analyzer(drill_id)?;
        Ok(Self::with_analyzer(analyzer, user_id.into()))
    }

    /// Start a session with explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `AUTH_REQUIRED` when `auth` reports no active sign-in
    pub fn start_with_config(
        drill: DrillKind,
        auth: &dyn AuthSignal,
        user_id: impl Into<String>,
        config: &AnalysisConfig,
    ) -> AppResult<Self> {
        Self::require_auth(auth)?;
        let analyzer = create_analyzer_with_config(drill, config);
        Ok(Self::with_analyzer(analyzer, user_id.into()))
    }

    fn require_auth(auth: &dyn AuthSignal) -> AppResult<()> {
        if auth.is_session_active() {
            Ok(())
        } else {
            Err(AppError::auth_required())
        }
    }

    fn with_analyzer(analyzer: Analyzer, user_id: String) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            user_id,
            started_at: Utc::now(),
            phase: SessionPhase::Ready,
            analyzer,
        };
        info!(
            session.id = %session.id,
            user.id = %session.user_id,
            drill = %session.drill(),
            "Practice session started"
        );
        session
    }

    /// Feed one captured frame
    ///
    /// # Errors
    ///
    /// Returns `SESSION_NOT_ACTIVE` once the session has been finished
    pub fn process_frame(&mut self, frame: &Frame, timestamp_ms: f64) -> AppResult<()> {
        if self.phase == SessionPhase::Finished {
            return Err(AppError::session_not_active(format!(
                "Session {} is already finished",
                self.id
            )));
        }
        self.analyzer.process_frame(frame, timestamp_ms);
        self.phase = SessionPhase::Running;
        trace!(session.id = %self.id, timestamp_ms, "Frame processed");
        Ok(())
    }

    /// Current result without ending the session
    #[must_use]
    pub fn preview(&self) -> DrillResult {
        self.analyzer.results()
    }

    /// Finalize the session
    ///
    /// # Errors
    ///
    /// Returns `SESSION_NOT_ACTIVE` if the session was already finished
    pub fn finish(&mut self) -> AppResult<SessionRecord> {
        if self.phase == SessionPhase::Finished {
            return Err(AppError::session_not_active(format!(
                "Session {} is already finished",
                self.id
            )));
        }
        let result = self.analyzer.results();
        self.phase = SessionPhase::Finished;

        info!(
            session.id = %self.id,
            drill = %result.drill_type,
            frames = result.total_frames,
            score = result.score,
            "Practice session finished"
        );

        Ok(SessionRecord {
            id: self.id,
            user_id: self.user_id.clone(),
            drill: result.drill_type,
            started_at: self.started_at,
            finished_at: Utc::now(),
            result,
        })
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Owner of the session
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// When the session started
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Drill being practiced
    #[must_use]
    pub fn drill(&self) -> DrillKind {
        self.analyzer.drill()
    }

    /// Frames processed so far
    #[must_use]
    pub fn frames_processed(&self) -> u64 {
        self.analyzer.frames_processed()
    }
}
