//! Document Queries

use crate::domain::document::DocumentId;

/// 获取文档详情查询
#[derive(Debug, Clone)]
pub struct GetDocument {
    pub document_id: DocumentId,
}

/// 列出所有文档查询
#[derive(Debug, Clone)]
pub struct ListDocuments;
