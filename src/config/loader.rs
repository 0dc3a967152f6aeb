//! Configuration Loader
//!
//! 来源按优先级叠加（后者覆盖前者）：
//! 1. 结构体上的 serde 默认值
//! 2. `config.toml`、`config.local.toml`（或显式指定的单个文件）
//! 3. `CHAPTER_NAV_` 前缀的环境变量，层级用 `__` 分隔

use std::path::Path;

use config::{Config, Environment, File};
use thiserror::Error;

use super::types::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

const SEARCH_FILES: [&str; 2] = ["config", "config.local"];

const ENV_PREFIX: &str = "CHAPTER_NAV";

/// 10 年
const MAX_IDLE_EXPIRE_SECS: u64 = 10 * 365 * 24 * 3600;

/// 按默认搜索路径加载
///
/// 例：`CHAPTER_NAV_SERVER__PORT=8080`、`CHAPTER_NAV_READING__MAX_CHAPTERS=500`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 指定路径时该文件必须存在，否则在工作目录下搜索可选文件
pub fn load_config_from_path(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let files: Vec<File<_, _>> = match path {
        Some(path) => vec![File::from(path).required(true)],
        None => SEARCH_FILES
            .iter()
            .map(|name| File::with_name(name).required(false))
            .collect(),
    };

    let config: AppConfig = Config::builder()
        .add_source(files)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let reading = &config.reading;
    let violations = [
        (config.server.port == 0, "server.port must not be 0"),
        (
            reading.gc_enabled && reading.gc_interval_secs == 0,
            "reading.gc_interval_secs must not be 0 while gc is enabled",
        ),
        (
            reading.idle_expire_secs > MAX_IDLE_EXPIRE_SECS,
            "reading.idle_expire_secs exceeds 10 years",
        ),
        (reading.max_chapters == 0, "reading.max_chapters must be at least 1"),
        (reading.event_buffer == 0, "reading.event_buffer must be at least 1"),
    ];

    match violations.iter().find(|(violated, _)| *violated) {
        Some((_, reason)) => Err(ConfigError::Invalid((*reason).to_string())),
        None => Ok(()),
    }
}

/// 启动时输出生效配置
pub fn print_config(config: &AppConfig) {
    tracing::info!(
        addr = %config.server.addr(),
        public_base_url = %config.server.public_base_url(),
        "Server config"
    );
    tracing::info!(
        max_chapters = config.reading.max_chapters,
        event_buffer = config.reading.event_buffer,
        gc_enabled = config.reading.gc_enabled,
        gc_interval_secs = config.reading.gc_interval_secs,
        idle_expire_secs = config.reading.idle_expire_secs,
        "Reading config"
    );
    tracing::info!(level = %config.log.level, json = config.log.json, "Log config");
}
