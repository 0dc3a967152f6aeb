//! Chapter Nav - 章节导航服务
//!
//! - Domain: document/, reading/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, worker, events

use std::sync::Arc;

use chapter_nav::config::{load_config, print_config, LogConfig};
use chapter_nav::infrastructure::events::EventPublisher;
use chapter_nav::infrastructure::http::{AppState, HttpServer};
use chapter_nav::infrastructure::memory::{InMemoryDocumentProvider, InMemoryNavigationStore};
use chapter_nav::infrastructure::worker::{SessionReaper, SessionReaperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Chapter Nav - 章节导航服务");
    print_config(&config);

    // 内存存储
    let store = Arc::new(InMemoryNavigationStore::new());
    let documents = Arc::new(InMemoryDocumentProvider::new());

    // 创建事件发布器
    let event_publisher = Arc::new(EventPublisher::with_capacity(config.reading.event_buffer));

    // 启动空闲会话回收
    if config.reading.gc_enabled {
        let reaper = SessionReaper::new(
            SessionReaperConfig {
                interval_secs: config.reading.gc_interval_secs,
                idle_expire_secs: config.reading.idle_expire_secs,
            },
            store.clone(),
            event_publisher.clone(),
        );
        tokio::spawn(reaper.run());
    }

    // 创建 HTTP 服务器
    let state = AppState::new(
        store,
        documents,
        event_publisher,
        config.reading.max_chapters,
    );

    let server = HttpServer::new(&config.server, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置中的级别
fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log.filter_directive()));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
