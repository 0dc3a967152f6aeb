//! Reading Queries - 章节导航栏视图

use crate::domain::document::{Document, DocumentId};
use crate::domain::reading::{Boundary, ChapterPosition, ProgressView};

/// 获取导航栏视图查询
#[derive(Debug, Clone)]
pub struct GetChapterBar {
    pub session_id: String,
}

/// 导航栏视图
///
/// 展示层只消费这里的数据：进度、两个方向的可用性，以及当前章节标题。
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterBarView {
    pub session_id: String,
    pub document_id: DocumentId,
    pub chapter_index: u32,
    pub chapter_title: Option<String>,
    pub progress: ProgressView,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub boundary: Boundary,
}

impl ChapterBarView {
    pub fn new(
        session_id: impl Into<String>,
        document_id: DocumentId,
        position: ChapterPosition,
        document: Option<&Document>,
    ) -> Self {
        let chapter_index = position.current_index();
        Self {
            session_id: session_id.into(),
            document_id,
            chapter_index,
            chapter_title: document
                .and_then(|d| d.chapter_at(chapter_index))
                .map(|c| c.title().to_string()),
            progress: position.progress(),
            can_go_previous: position.can_go_previous(),
            can_go_next: position.can_go_next(),
            boundary: position.boundary(),
        }
    }
}

/// 把 store 中的索引放到文档的章节总数下解释
///
/// 文档缺失时章节总数按 1 处理；store 中的索引若超出范围则收拢到最后一章。
pub fn resolve_position(stored_index: u32, document: Option<&Document>) -> ChapterPosition {
    ChapterPosition::clamped(stored_index, Document::chapter_count_of(document))
}
