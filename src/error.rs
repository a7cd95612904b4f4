use thiserror::Error;

pub use crate::agent::StorageError;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Invalid(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let e = ConfigError::Invalid("assistant.name must not be empty".into());
        assert_eq!(e.to_string(), "config error: assistant.name must not be empty");
    }

    #[test]
    fn storage_error_passes_through() {
        let e: ConfigError = StorageError::FileHost("file://db/x.db".into()).into();
        assert_eq!(e.to_string(), "storage url 'file://db/x.db' points at a remote host");
    }
}
