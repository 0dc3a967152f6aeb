//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod events;
pub mod http;
pub mod memory;
pub mod worker;

pub use events::{EventPublisher, ReadingEvent};
pub use memory::{InMemoryDocumentProvider, InMemoryNavigationStore};
pub use worker::{SessionReaper, SessionReaperConfig};
