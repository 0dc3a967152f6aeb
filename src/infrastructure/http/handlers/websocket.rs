//! WebSocket Handler
//!
//! - `/ws/reading/:session_id` 推送该会话的 chapter_changed / reading_closed
//! - `/ws/events` 推送 document_loaded / document_unloaded
//!
//! 事件以 JSON 文本帧下发；客户端上行帧只用于保活。

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::infrastructure::events::ReadingEvent;
use crate::infrastructure::http::state::AppState;

pub async fn reading_socket(
    ws: WebSocketUpgrade,
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |mut socket| async move {
        let Some(events) = subscribe_session_events(&state, &session_id) else {
            tracing::warn!(session_id = %session_id, "Rejecting socket for unknown reading session");
            let _ = SinkExt::close(&mut socket).await;
            return;
        };

        let store = state.store.clone();
        let keepalive_id = session_id.clone();

        pump(socket, events, &session_id, |_| true, move || store.touch(&keepalive_id)).await;
    })
}

pub async fn events_socket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let events = state.event_publisher.subscribe_global();
    ws.on_upgrade(move |socket| pump(socket, events, "global", is_document_event, || {}))
}

/// 先注册再校验：会话若在两步之间被关闭，撤销这次注册
fn subscribe_session_events(
    state: &AppState,
    session_id: &str,
) -> Option<broadcast::Receiver<ReadingEvent>> {
    let events = state.event_publisher.register_session(session_id);
    if state.store.is_valid(session_id) {
        Some(events)
    } else {
        state.event_publisher.unregister_session(session_id);
        None
    }
}

fn is_document_event(event: &ReadingEvent) -> bool {
    matches!(
        event,
        ReadingEvent::DocumentLoaded { .. } | ReadingEvent::DocumentUnloaded { .. }
    )
}

/// 双向转发直到任一方向结束
///
/// 下行：过滤后的事件序列化为文本帧，会话关闭事件发出后主动断开。
/// 上行：任意非 Close 帧触发 `on_client_frame`。
async fn pump<F, K>(
    socket: WebSocket,
    mut events: broadcast::Receiver<ReadingEvent>,
    channel: &str,
    filter: F,
    on_client_frame: K,
) where
    F: Fn(&ReadingEvent) -> bool + Send + 'static,
    K: Fn() + Send + 'static,
{
    let (mut sink, mut stream) = socket.split();
    tracing::info!(channel = %channel, "Socket connected");

    let outbound_channel = channel.to_owned();
    let mut outbound = tokio::spawn(async move {
        loop {
            let event = match events.recv().await {
                Ok(event) if filter(&event) => event,
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(channel = %outbound_channel, skipped, "Socket subscriber lagged");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let frame = match serde_json::to_string(&event) {
                Ok(json) => Message::Text(json),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode reading event");
                    continue;
                }
            };
            if sink.send(frame).await.is_err() {
                break;
            }
            if matches!(event, ReadingEvent::ReadingClosed { .. }) {
                let _ = sink.close().await;
                break;
            }
        }
    });

    let mut inbound = tokio::spawn(async move {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Close(_)) | Err(_) => break,
                Ok(_) => on_client_frame(),
            }
        }
    });

    tokio::select! {
        _ = &mut outbound => inbound.abort(),
        _ = &mut inbound => outbound.abort(),
    }

    tracing::info!(channel = %channel, "Socket disconnected");
}
