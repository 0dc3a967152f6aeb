//! Reading Context - Errors

use thiserror::Error;

use super::ChapterCount;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadingError {
    #[error("章节索引越界: {index} (章节总数: {count})")]
    IndexOutOfRange { index: u32, count: ChapterCount },
}
