//! Navigation Store Port - 阅读位置的唯一写入方
//!
//! 每个阅读会话的 `current_chapter_index` 都由 store 持有，
//! 导航结果以更新意图的形式写回。具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::document::DocumentId;

/// Navigation Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Reading session not found: {0}")]
    NotFound(String),

    #[error("Reading session already exists: {0}")]
    AlreadyExists(String),
}

/// 阅读会话（in-memory）
#[derive(Debug, Clone)]
pub struct ReadingSession {
    pub id: String,
    pub document_id: DocumentId,
    pub current_chapter_index: u32,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl ReadingSession {
    pub fn new(document_id: DocumentId, start_chapter: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            document_id,
            current_chapter_index: start_chapter,
            created_at: now,
            last_activity: now,
        }
    }
}

/// Navigation Store Port
pub trait NavigationStorePort: Send + Sync {
    /// 创建会话
    fn create(&self, session: ReadingSession) -> Result<String, StoreError>;

    /// 获取会话快照
    fn get(&self, id: &str) -> Result<ReadingSession, StoreError>;

    /// 持有会话锁完成一次 read-transition-write
    ///
    /// `transition` 接收当前索引，返回 `Some(new_index)` 时写回，
    /// 返回 `None` 时保持不变。返回更新后的会话快照。
    fn transition(
        &self,
        id: &str,
        transition: &mut dyn FnMut(u32) -> Option<u32>,
    ) -> Result<ReadingSession, StoreError>;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), StoreError>;

    /// 更新最后活动时间
    fn touch(&self, id: &str);

    /// 检查会话是否有效
    fn is_valid(&self, id: &str) -> bool;

    /// 某个文档下所有会话的 ID
    fn find_by_document(&self, document_id: DocumentId) -> Vec<String>;

    /// 获取所有过期会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 在会话锁内复查空闲时间，仍然过期才关闭
    ///
    /// 返回 `true` 表示本次调用关闭了会话。
    fn close_if_idle(&self, id: &str, idle_timeout_secs: u64) -> bool;

    /// 获取所有会话 ID
    fn list_all(&self) -> Vec<String>;
}
