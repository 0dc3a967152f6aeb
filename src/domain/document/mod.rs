//! Document Context - 文档限界上下文
//!
//! 职责:
//! - 文档聚合（只读的有序章节列表）
//! - 章节实体
//! - 向阅读上下文提供章节总数

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::Document;
pub use entities::Chapter;
pub use errors::DocumentError;
pub use value_objects::{DocumentId, Title};
