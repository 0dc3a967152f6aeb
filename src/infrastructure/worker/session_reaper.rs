//! Session Reaper - 空闲阅读会话回收

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::NavigationStorePort;
use crate::infrastructure::events::EventPublisher;

/// Reaper 配置
#[derive(Debug, Clone)]
pub struct SessionReaperConfig {
    /// 扫描间隔（秒）
    pub interval_secs: u64,
    /// 会话空闲多久后过期（秒）
    pub idle_expire_secs: u64,
}

impl Default for SessionReaperConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600,
            idle_expire_secs: 86400,
        }
    }
}

/// 会话回收 Worker
pub struct SessionReaper {
    config: SessionReaperConfig,
    store: Arc<dyn NavigationStorePort>,
    event_publisher: Arc<EventPublisher>,
}

impl SessionReaper {
    pub fn new(
        config: SessionReaperConfig,
        store: Arc<dyn NavigationStorePort>,
        event_publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            config,
            store,
            event_publisher,
        }
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            idle_expire_secs = self.config.idle_expire_secs,
            "SessionReaper started"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs.max(1)));
        // 第一次 tick 立即返回
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let reaped = self.reap_once();
            if reaped > 0 {
                tracing::info!(reaped = reaped, "Expired reading sessions reaped");
            }
        }
    }

    /// 执行一轮回收，返回关闭的会话数
    ///
    /// 扫描得到的只是候选；关闭时 store 会在会话锁内复查，
    /// 扫描之后又有活动的会话会被保留。
    pub fn reap_once(&self) -> usize {
        let idle_expire_secs = self.config.idle_expire_secs;
        let mut reaped = 0;
        for session_id in self.store.get_expired_sessions(idle_expire_secs) {
            if self.store.close_if_idle(&session_id, idle_expire_secs) {
                self.event_publisher
                    .publish_reading_closed(&session_id, "expired");
                self.event_publisher.unregister_session(&session_id);
                tracing::debug!(session_id = %session_id, "Reading session expired");
                reaped += 1;
            }
        }
        reaped
    }
}
