//! In-Memory Navigation Store Implementation

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::application::ports::{NavigationStorePort, ReadingSession, StoreError};
use crate::domain::document::DocumentId;

/// 内存阅读位置 store
///
/// 每个会话的更新都在对应 DashMap 条目的写锁内完成。
pub struct InMemoryNavigationStore {
    sessions: DashMap<String, ReadingSession>,
}

impl InMemoryNavigationStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl Default for InMemoryNavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// chrono 的 Duration 以毫秒为上限
fn idle_timeout(secs: u64) -> chrono::Duration {
    chrono::Duration::seconds(secs.min(i64::MAX as u64 / 1000) as i64)
}

fn is_idle(session: &ReadingSession, now: DateTime<Utc>, timeout: chrono::Duration) -> bool {
    now - session.last_activity > timeout
}

impl NavigationStorePort for InMemoryNavigationStore {
    fn create(&self, session: ReadingSession) -> Result<String, StoreError> {
        let session_id = session.id.clone();
        if self.sessions.contains_key(&session_id) {
            return Err(StoreError::AlreadyExists(session_id));
        }
        self.sessions.insert(session_id.clone(), session);
        tracing::debug!(session_id = %session_id, "Reading session stored");
        Ok(session_id)
    }

    fn get(&self, id: &str) -> Result<ReadingSession, StoreError> {
        self.sessions
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn transition(
        &self,
        id: &str,
        transition: &mut dyn FnMut(u32) -> Option<u32>,
    ) -> Result<ReadingSession, StoreError> {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if let Some(index) = transition(session.current_chapter_index) {
            session.current_chapter_index = index;
            tracing::debug!(session_id = %id, chapter_index = index, "Current chapter updated");
        }
        session.last_activity = Utc::now();
        Ok(session.clone())
    }

    fn close(&self, id: &str) -> Result<(), StoreError> {
        self.sessions
            .remove(id)
            .map(|_| {
                tracing::debug!(session_id = %id, "Reading session removed");
            })
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn touch(&self, id: &str) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            session.last_activity = Utc::now();
        }
    }

    fn is_valid(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    fn find_by_document(&self, document_id: DocumentId) -> Vec<String> {
        self.sessions
            .iter()
            .filter(|entry| entry.document_id == document_id)
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();
        let timeout = idle_timeout(idle_timeout_secs);

        self.sessions
            .iter()
            .filter(|entry| is_idle(entry.value(), now, timeout))
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn close_if_idle(&self, id: &str, idle_timeout_secs: u64) -> bool {
        let timeout = idle_timeout(idle_timeout_secs);
        let removed = self
            .sessions
            .remove_if(id, |_, session| is_idle(session, Utc::now(), timeout))
            .is_some();
        if removed {
            tracing::debug!(session_id = %id, "Idle reading session removed");
        }
        removed
    }

    fn list_all(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}
