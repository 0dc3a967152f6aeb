//! Event Publisher Implementation
//!
//! 章节变更推送实现

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// 推送事件类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ReadingEvent {
    /// 当前章节变更
    ChapterChanged {
        session_id: String,
        chapter_index: u32,
        chapter_count: u32,
        percent: f64,
    },
    /// 阅读会话关闭
    ReadingClosed {
        session_id: String,
        reason: String,
    },
    /// 文档加载完成
    DocumentLoaded {
        document_id: Uuid,
        title: String,
        chapter_count: u32,
    },
    /// 文档已卸载
    DocumentUnloaded {
        document_id: Uuid,
    },
}

/// 事件发布器
pub struct EventPublisher {
    /// session_id -> broadcast sender (会话级事件)
    session_channels: DashMap<String, broadcast::Sender<ReadingEvent>>,
    /// 全局事件（文档加载/卸载）
    global_channel: broadcast::Sender<ReadingEvent>,
    capacity: usize,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (global_tx, _) = broadcast::channel(capacity);
        Self {
            session_channels: DashMap::new(),
            global_channel: global_tx,
            capacity,
        }
    }

    /// 订阅全局事件
    pub fn subscribe_global(&self) -> broadcast::Receiver<ReadingEvent> {
        self.global_channel.subscribe()
    }

    /// 注册会话的事件通道
    pub fn register_session(&self, session_id: &str) -> broadcast::Receiver<ReadingEvent> {
        self.session_channels
            .entry(session_id.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    pub fn is_registered(&self, session_id: &str) -> bool {
        self.session_channels.contains_key(session_id)
    }

    /// 取消注册会话
    pub fn unregister_session(&self, session_id: &str) {
        self.session_channels.remove(session_id);
    }

    /// 发布章节变更事件
    pub fn publish_chapter_changed(
        &self,
        session_id: &str,
        chapter_index: u32,
        chapter_count: u32,
        percent: f64,
    ) {
        self.publish_to_session(
            session_id,
            ReadingEvent::ChapterChanged {
                session_id: session_id.to_string(),
                chapter_index,
                chapter_count,
                percent,
            },
        );
    }

    /// 发布会话关闭事件
    pub fn publish_reading_closed(&self, session_id: &str, reason: &str) {
        self.publish_to_session(
            session_id,
            ReadingEvent::ReadingClosed {
                session_id: session_id.to_string(),
                reason: reason.to_string(),
            },
        );
    }

    /// 发布文档加载完成事件（全局广播）
    pub fn publish_document_loaded(&self, document_id: Uuid, title: &str, chapter_count: u32) {
        self.publish_global(ReadingEvent::DocumentLoaded {
            document_id,
            title: title.to_string(),
            chapter_count,
        });
    }

    /// 发布文档卸载事件（全局广播）
    pub fn publish_document_unloaded(&self, document_id: Uuid) {
        self.publish_global(ReadingEvent::DocumentUnloaded { document_id });
    }

    fn publish_global(&self, event: ReadingEvent) {
        if let Err(e) = self.global_channel.send(event) {
            tracing::debug!(error = %e, "Failed to publish global event (no receivers)");
        }
    }

    /// 发布事件到指定会话
    fn publish_to_session(&self, session_id: &str, event: ReadingEvent) {
        if let Some(sender) = self.session_channels.get(session_id) {
            if let Err(e) = sender.send(event) {
                tracing::debug!(
                    session_id = %session_id,
                    error = %e,
                    "Failed to publish event (no receivers)"
                );
            }
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}
