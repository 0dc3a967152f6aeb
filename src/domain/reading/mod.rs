//! Reading Context - 阅读定位限界上下文
//!
//! 职责:
//! - 章节数量归一化（缺失或为空时视为 1）
//! - 章节位置的纯状态转移（上一章 / 下一章）
//! - 进度视图计算

mod errors;
mod position;
mod value_objects;

pub use errors::ReadingError;
pub use position::{Boundary, ChapterPosition, Navigation, ProgressView};
pub use value_objects::{ChapterCount, Direction};
