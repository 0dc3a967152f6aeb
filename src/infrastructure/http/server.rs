//! HTTP Server

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 章节目录随文档一起提交，请求体上限 2MB
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// 组装带全部中间件的 Router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    create_routes()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    addr: String,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            addr: config.addr(),
            state: Arc::new(state),
        }
    }

    /// 启动服务器，`shutdown_signal` 完成后优雅退出
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.addr).await?;
        tracing::info!(addr = %self.addr, "HTTP server listening");

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::infrastructure::events::EventPublisher;
    use crate::infrastructure::memory::{InMemoryDocumentProvider, InMemoryNavigationStore};

    fn test_router() -> Router {
        build_router(Arc::new(AppState::new(
            Arc::new(InMemoryNavigationStore::new()),
            Arc::new(InMemoryDocumentProvider::new()),
            Arc::new(EventPublisher::new()),
            100,
        )))
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let title = "x".repeat(MAX_BODY_BYTES + 1);
        let body = serde_json::json!({ "title": title }).to_string();
        let request = Request::builder()
            .method("POST")
            .uri("/api/document/load")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/chapters")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
