// ABOUTME: In-memory result store for finished sessions keyed by session id
// ABOUTME: Shared behind Arc<RwLock> so clones observe the same records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ResultStore;
use crate::session::SessionRecord;
use async_trait::async_trait;
use drillsense_core::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-local [`ResultStore`]
///
/// Cloning is cheap and every clone shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultStore {
    records: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
}

impl InMemoryResultStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save(&self, record: SessionRecord) -> AppResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(AppError::already_exists(format!("Session {}", record.id)));
        }
        debug!(session.id = %record.id, user.id = %record.user_id, "Storing session record");
        records.insert(record.id, record);
        drop(records);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<SessionRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<SessionRecord>> {
        let mut records: Vec<SessionRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));
        Ok(records)
    }
}
