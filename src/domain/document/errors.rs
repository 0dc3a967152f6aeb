//! Document Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("章节数量超出上限: {count} > {max}")]
    TooManyChapters { count: usize, max: usize },
}
