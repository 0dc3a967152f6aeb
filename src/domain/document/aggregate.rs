//! Document Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Chapter, DocumentError, DocumentId, Title};
use crate::domain::reading::ChapterCount;

/// Document 聚合根
///
/// 不变量:
/// - 章节顺序在加载后不可变
/// - 章节编号从 1 开始连续
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    title: Title,
    chapters: Vec<Chapter>,
    created_at: DateTime<Utc>,
}

impl Document {
    /// 从章节标题列表创建文档
    ///
    /// 空列表是允许的，此时章节总数按 1 计算。
    pub fn new<I, S>(title: Title, chapter_titles: I, max_chapters: usize) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chapters: Vec<Chapter> = chapter_titles
            .into_iter()
            .zip(1u32..)
            .map(|(title, number)| Chapter::new(number, title))
            .collect();

        if chapters.len() > max_chapters {
            return Err(DocumentError::TooManyChapters {
                count: chapters.len(),
                max: max_chapters,
            });
        }

        Ok(Self {
            id: DocumentId::new(),
            title,
            chapters,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// 零基索引取章节
    pub fn chapter_at(&self, index: u32) -> Option<&Chapter> {
        self.chapters.get(index as usize)
    }

    pub fn chapter_count(&self) -> ChapterCount {
        ChapterCount::from_len(Some(self.chapters.len()))
    }

    /// 文档缺失时同样得到可用的章节总数
    pub fn chapter_count_of(document: Option<&Document>) -> ChapterCount {
        ChapterCount::from_len(document.map(|d| d.chapters.len()))
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
