//! Ping Handler - 健康检查 + 运行时统计

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub documents: usize,
    pub active_sessions: usize,
}

/// 文档仓储不可用时不视为宕机，文档数记为 0
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let documents = match state.documents.count().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to count documents for ping");
            0
        }
    };

    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        documents,
        active_sessions: state.store.list_all().len(),
    })
}
