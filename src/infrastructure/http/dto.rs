//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{ChapterBarView, DocumentResponse};
use crate::domain::reading::{Boundary, ProgressView};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Document DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoadDocumentRequest {
    pub title: String,
    /// 缺省时视为空目录（按单章节处理）
    #[serde(default)]
    pub chapters: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentIdRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LoadDocumentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub chapter_count: u32,
}

#[derive(Debug, Serialize)]
pub struct DocumentDto {
    pub id: Uuid,
    pub title: String,
    pub chapter_count: u32,
    pub chapters: Vec<String>,
    pub created_at: String,
}

impl From<DocumentResponse> for DocumentDto {
    fn from(doc: DocumentResponse) -> Self {
        Self {
            id: *doc.id.as_uuid(),
            title: doc.title,
            chapter_count: doc.chapter_count,
            chapters: doc.chapter_titles,
            created_at: doc.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnloadDocumentResponseDto {
    pub id: Uuid,
    pub closed_sessions: usize,
}

// ============================================================================
// Reading DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenReadingRequest {
    pub document_id: Uuid,
    #[serde(default)]
    pub start_chapter: u32,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
}

/// 导航栏视图
#[derive(Debug, Serialize)]
pub struct ChapterBarDto {
    pub session_id: String,
    pub document_id: Uuid,
    pub chapter_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,
    pub progress: ProgressView,
    /// `n/total` 标签
    pub label: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub boundary: Boundary,
}

impl From<ChapterBarView> for ChapterBarDto {
    fn from(view: ChapterBarView) -> Self {
        Self {
            label: view.progress.label(),
            session_id: view.session_id,
            document_id: *view.document_id.as_uuid(),
            chapter_index: view.chapter_index,
            chapter_title: view.chapter_title,
            progress: view.progress,
            can_go_previous: view.can_go_previous,
            can_go_next: view.can_go_next,
            boundary: view.boundary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavigateResponseDto {
    pub moved: bool,
    #[serde(flatten)]
    pub bar: ChapterBarDto,
}

#[derive(Debug, Serialize)]
pub struct CloseReadingResponseDto {
    pub session_id: String,
}
