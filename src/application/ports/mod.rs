//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod document_provider;
mod navigation_store;

pub use document_provider::{DocumentProviderPort, RepositoryError};
pub use navigation_store::{NavigationStorePort, ReadingSession, StoreError};
