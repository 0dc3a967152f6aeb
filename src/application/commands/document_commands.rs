//! Document Commands - 文档相关命令

use crate::domain::document::DocumentId;

/// 加载文档命令
#[derive(Debug, Clone)]
pub struct LoadDocument {
    pub title: String,
    pub chapter_titles: Vec<String>,
}

/// 加载文档响应
#[derive(Debug, Clone)]
pub struct LoadDocumentResponse {
    pub document_id: DocumentId,
    pub title: String,
    pub chapter_count: u32,
}

/// 卸载文档命令 - 同时关闭该文档下的阅读会话
#[derive(Debug, Clone)]
pub struct UnloadDocument {
    pub document_id: DocumentId,
}

/// 卸载文档响应
#[derive(Debug, Clone)]
pub struct UnloadDocumentResponse {
    pub document_id: DocumentId,
    pub closed_sessions: usize,
}
