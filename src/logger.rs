use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// 解析日志过滤规则，支持 `info` 或 `telex=debug,warn` 这样的写法
pub fn filter(level: &str) -> Result<EnvFilter, ConfigError> {
    if level.trim().is_empty() {
        return Err(ConfigError::Logger("log level must not be empty".into()));
    }
    EnvFilter::try_new(level)
        .map_err(|e| ConfigError::Logger(format!("invalid log level '{level}': {e}")))
}

/// 初始化全局日志，设置了 RUST_LOG 时以它为准
///
/// 日志写到 stderr，stdout 留给清单输出。
pub fn init(level: &str) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => filter(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Logger(format!("failed to set subscriber: {e}")))
}
