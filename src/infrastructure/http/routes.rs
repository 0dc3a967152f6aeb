//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/document/load       POST  加载文档（标题 + 章节目录）
//! - /api/document/get        POST  获取文档详情
//! - /api/document/list       GET   列出所有文档
//! - /api/document/unload     POST  卸载文档并关闭其阅读会话
//! - /api/reading/open        POST  打开阅读会话
//! - /api/reading/bar         POST  获取导航栏视图
//! - /api/reading/previous    POST  上一章
//! - /api/reading/next        POST  下一章
//! - /api/reading/close       POST  关闭阅读会话
//! - /ws/reading/{id}         WS    会话事件（章节变更、会话关闭）
//! - /ws/events               WS    全局事件（文档加载/卸载）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/reading/:session_id", get(handlers::reading_socket))
        .route("/ws/events", get(handlers::events_socket))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/document", document_routes())
        .nest("/reading", reading_routes())
}

/// Document 路由
fn document_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/load", post(handlers::load_document))
        .route("/get", post(handlers::get_document))
        .route("/list", get(handlers::list_documents))
        .route("/unload", post(handlers::unload_document))
}

/// Reading 路由
fn reading_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/open", post(handlers::open_reading))
        .route("/bar", post(handlers::chapter_bar))
        .route("/previous", post(handlers::previous_chapter))
        .route("/next", post(handlers::next_chapter))
        .route("/close", post(handlers::close_reading))
}
