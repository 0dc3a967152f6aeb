//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{RepositoryError, StoreError};
use crate::domain::document::DocumentError;
use crate::domain::reading::ReadingError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::not_found("Document", id),
            RepositoryError::Duplicate(id) => {
                Self::InvalidState(format!("document already loaded: {}", id))
            }
            RepositoryError::StorageError(msg) => Self::RepositoryError(msg),
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::not_found("Reading session", id),
            StoreError::AlreadyExists(id) => {
                Self::internal(format!("reading session already exists: {}", id))
            }
        }
    }
}

impl From<DocumentError> for ApplicationError {
    fn from(err: DocumentError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ReadingError> for ApplicationError {
    fn from(err: ReadingError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::ChapterCount;

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err = ApplicationError::from(StoreError::NotFound("abc".to_string()));
        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "Reading session", ref id } if id == "abc"
        ));
    }

    #[test]
    fn test_duplicate_document_is_invalid_state() {
        let err = ApplicationError::from(RepositoryError::Duplicate("d1".to_string()));
        assert!(matches!(err, ApplicationError::InvalidState(_)));
    }

    #[test]
    fn test_reading_error_is_validation() {
        let err = ApplicationError::from(ReadingError::IndexOutOfRange {
            index: 9,
            count: ChapterCount::new(3),
        });
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}
