//! Memory Layer - In-Memory State Management
//!
//! 实现 NavigationStore 和 DocumentProvider，阅读会话与文档都保存在内存中

mod document_provider;
mod navigation_store;

pub use document_provider::InMemoryDocumentProvider;
pub use navigation_store::InMemoryNavigationStore;
