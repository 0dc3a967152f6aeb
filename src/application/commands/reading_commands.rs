//! Reading Commands - 阅读会话与章节导航命令

use crate::application::queries::ChapterBarView;
use crate::domain::document::DocumentId;
use crate::domain::reading::Direction;

/// 打开阅读会话命令
#[derive(Debug, Clone)]
pub struct OpenReadingCommand {
    pub document_id: DocumentId,
    pub start_chapter: u32,
}

/// 打开阅读会话响应
#[derive(Debug, Clone)]
pub struct OpenReadingResponse {
    pub session_id: String,
    pub view: ChapterBarView,
}

/// 章节导航命令 - 上一章 / 下一章
#[derive(Debug, Clone)]
pub struct NavigateChapterCommand {
    pub session_id: String,
    pub direction: Direction,
}

/// 章节导航响应
///
/// 在边界处导航不是错误：`moved` 为 false，视图与导航前一致。
#[derive(Debug, Clone)]
pub struct NavigateChapterResponse {
    pub moved: bool,
    pub view: ChapterBarView,
}

/// 关闭阅读会话命令
#[derive(Debug, Clone)]
pub struct CloseReadingCommand {
    pub session_id: String,
}

/// 关闭阅读会话响应
#[derive(Debug, Clone)]
pub struct CloseReadingResponse {
    pub session_id: String,
}
