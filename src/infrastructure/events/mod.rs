//! Events Layer - 阅读位置变更通知
//!
//! 基于 tokio broadcast 的事件发布，WebSocket 订阅

mod publisher;

pub use publisher::{EventPublisher, ReadingEvent};
