//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DocumentProvider、NavigationStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Document commands
    LoadDocument,
    LoadDocumentResponse,
    UnloadDocument,
    UnloadDocumentResponse,
    // Reading commands
    CloseReadingCommand,
    CloseReadingResponse,
    NavigateChapterCommand,
    NavigateChapterResponse,
    OpenReadingCommand,
    OpenReadingResponse,
    // Handlers
    handlers::{
        CloseReadingHandler, LoadDocumentHandler, NavigateChapterHandler, OpenReadingHandler,
        UnloadDocumentHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    DocumentProviderPort, NavigationStorePort, ReadingSession, RepositoryError, StoreError,
};

pub use queries::{
    resolve_position,
    ChapterBarView,
    // Document queries
    GetDocument,
    ListDocuments,
    // Reading queries
    GetChapterBar,
    // Handlers
    handlers::{DocumentResponse, GetChapterBarHandler, GetDocumentHandler, ListDocumentsHandler},
};
