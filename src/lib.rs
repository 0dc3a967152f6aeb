//! chapter-nav - 阅读器章节导航服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Document Context: 只读的文档与章节目录
//! - Reading Context: 章节定位状态机（进度、边界守卫、单步导航）
//!
//! 应用层 (application/):
//! - Ports: DocumentProvider, NavigationStore
//! - Commands: 加载/卸载文档，打开/导航/关闭阅读会话
//! - Queries: 文档详情，导航栏视图
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket
//! - Memory: NavigationStore, DocumentProvider 内存实现
//! - Worker: SessionReaper 空闲会话回收
//! - Events: 章节变更事件发布

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
