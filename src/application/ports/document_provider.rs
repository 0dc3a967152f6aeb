//! Document Provider Port - 文档来源
//!
//! 文档由外部加载并只读地提供给阅读上下文，具体实现在 infrastructure 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::{Document, DocumentId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Document Provider Port
#[async_trait]
pub trait DocumentProviderPort: Send + Sync {
    /// 保存文档
    async fn save(&self, document: Document) -> Result<(), RepositoryError>;

    /// 根据 ID 查找文档
    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError>;

    /// 列出所有文档
    async fn find_all(&self) -> Result<Vec<Document>, RepositoryError>;

    /// 已加载的文档数
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// 删除文档
    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError>;
}
