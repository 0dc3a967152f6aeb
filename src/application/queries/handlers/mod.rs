//! Query Handlers 实现

mod document_handlers;
mod reading_handlers;

pub use document_handlers::*;
pub use reading_handlers::*;
