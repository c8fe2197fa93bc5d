// ABOUTME: Persistence collaborator for finished sessions plus history queries and summaries
// ABOUTME: Pluggable async store trait with sort/filter views and dashboard aggregate statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session history
//!
//! Records are opaque to the analysis core: it hands a finished
//! [`SessionRecord`] to a [`ResultStore`] and reads them back for the history
//! view.

/// In-memory store implementation
pub mod memory;

pub use memory::InMemoryResultStore;

use crate::session::SessionRecord;
use async_trait::async_trait;
use drillsense_core::constants::scoring::MIN_SCORE;
use drillsense_core::models::clamp_score;
use drillsense_core::{AppResult, DrillKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Storage backend for finished session records
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist a record; each session id may be saved once
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` when the id was saved before, or
    /// `STORAGE_ERROR` on backend failure
    async fn save(&self, record: SessionRecord) -> AppResult<()>;

    /// Fetch a record by session id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown id
    async fn get(&self, id: Uuid) -> AppResult<SessionRecord>;

    /// All records of one user, newest first
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` on backend failure
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<SessionRecord>>;
}

/// Ordering for history listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistorySort {
    /// Most recent first
    #[default]
    Date,
    /// Highest overall score first
    Score,
    /// Alphabetical by drill identifier
    Drill,
}

/// Filter and ordering applied to a user's history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Restrict to one drill; `None` shows all
    pub drill: Option<DrillKind>,
    /// Ordering
    pub sort: HistorySort,
}

impl HistoryQuery {
    /// Apply the filter and ordering
    #[must_use]
    pub fn apply(&self, records: &[SessionRecord]) -> Vec<SessionRecord> {
        let mut selected: Vec<SessionRecord> = records
            .iter()
            .filter(|record| self.drill.is_none() || self.drill == Some(record.drill))
            .cloned()
            .collect();

        match self.sort {
            HistorySort::Date => selected.sort_by(|a, b| b.finished_at.cmp(&a.finished_at)),
            HistorySort::Score => selected.sort_by(|a, b| b.result.score.cmp(&a.result.score)),
            HistorySort::Drill => selected.sort_by(|a, b| a.drill.id().cmp(b.drill.id())),
        }
        selected
    }
}

/// Aggregate statistics shown above a user's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of finished sessions
    pub total_sessions: usize,
    /// Rounded mean overall score, 0 with no sessions
    pub average_score: u8,
    /// Best overall score, 0 with no sessions
    pub personal_best: u8,
    /// Number of different drills practiced
    pub distinct_drills: usize,
}

impl HistorySummary {
    /// Summarize a set of records
    #[must_use]
    pub fn from_records(records: &[SessionRecord]) -> Self {
        if records.is_empty() {
            return Self {
                total_sessions: 0,
                average_score: MIN_SCORE,
                personal_best: MIN_SCORE,
                distinct_drills: 0,
            };
        }

        let total: u64 = records.iter().map(|r| u64::from(r.result.score)).sum();
        let drills: BTreeSet<DrillKind> = records.iter().map(|r| r.drill).collect();

        Self {
            total_sessions: records.len(),
            average_score: clamp_score(total as f64 / records.len() as f64),
            personal_best: records
                .iter()
                .map(|r| r.result.score)
                .max()
                .unwrap_or(MIN_SCORE),
            distinct_drills: drills.len(),
        }
    }
}
