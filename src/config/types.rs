//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 阅读会话配置
    #[serde(default)]
    pub reading: ReadingConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 阅读会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingConfig {
    /// 会话空闲过期时间（秒）
    #[serde(default = "default_idle_expire")]
    pub idle_expire_secs: u64,

    /// 是否启用空闲会话回收
    #[serde(default = "default_gc_enabled")]
    pub gc_enabled: bool,

    /// 回收间隔（秒）
    #[serde(default = "default_gc_interval")]
    pub gc_interval_secs: u64,

    /// 单个文档的章节数上限
    #[serde(default = "default_max_chapters")]
    pub max_chapters: usize,

    /// 每个事件通道的缓冲容量
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

fn default_idle_expire() -> u64 {
    86400 // 24 小时
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    3600 // 1 小时
}

fn default_max_chapters() -> usize {
    10_000
}

fn default_event_buffer() -> usize {
    100
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            idle_expire_secs: default_idle_expire(),
            gc_enabled: default_gc_enabled(),
            gc_interval_secs: default_gc_interval(),
            max_chapters: default_max_chapters(),
            event_buffer: default_event_buffer(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// 默认的 EnvFilter 指令
    pub fn filter_directive(&self) -> String {
        format!(
            "{},chapter_nav={},tower_http=debug",
            self.level, self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5070);
        assert_eq!(config.reading.idle_expire_secs, 86400);
        assert_eq!(config.reading.max_chapters, 10_000);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5070");
        assert_eq!(config.public_base_url(), "http://localhost:5070");
    }

    #[test]
    fn test_log_filter_directive() {
        let log = LogConfig {
            level: "debug".to_string(),
            json: false,
        };
        assert_eq!(
            log.filter_directive(),
            "debug,chapter_nav=debug,tower_http=debug"
        );
    }
}
