//! HTTP Middleware
//!
//! 请求耗时记录：每个响应都带 `x-response-time-ms` 头，
//! 非 2xx 状态码按级别记录日志。业务错误（errno != 0）仍返回 200，
//! 由 ApiError::into_response() 记录；这里只会看到 axum 自身的
//! 422/400/413/404。

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;

pub const RESPONSE_TIME_HEADER: &str = "x-response-time-ms";

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let mut response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    response
        .headers_mut()
        .insert(RESPONSE_TIME_HEADER, HeaderValue::from(elapsed_ms));

    match status {
        500..=599 => tracing::error!(%method, %path, status, elapsed_ms, "Request failed"),
        400..=499 => tracing::warn!(%method, %path, status, elapsed_ms, "Request rejected"),
        _ => tracing::debug!(%method, %path, status, elapsed_ms, "Request served"),
    }

    response
}
