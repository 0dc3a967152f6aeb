//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod document_commands;
mod reading_commands;

pub mod handlers;

pub use document_commands::*;
pub use reading_commands::*;
