//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Document Context: 文档与章节目录
//! - Reading Context: 章节定位状态机（进度、边界守卫、单步导航）

pub mod document;
pub mod reading;
