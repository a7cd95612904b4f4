use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 存储 URL 解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage url is empty")]
    EmptyUrl,

    #[error("storage url '{0}' has an empty file path")]
    EmptyPath(String),

    #[error("unsupported storage url scheme: '{0}'")]
    UnsupportedScheme(String),

    #[error("storage url '{0}' points at a remote host")]
    FileHost(String),
}

/// 存储位置（只描述，不打开）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    Memory,
    Remote(String),
}

const REMOTE_SCHEMES: &[&str] = &["libsql://", "http://", "https://", "ws://", "wss://"];

/// 存储后端描述符 - 仅记录连接字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBackend {
    url: String,
}

impl StorageBackend {
    pub fn new(url: impl Into<String>) -> Self {
        StorageBackend { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 解析连接字符串，相对路径保持原样
    pub fn location(&self) -> Result<StorageLocation, StorageError> {
        let url = self.url.as_str();
        if url.is_empty() {
            return Err(StorageError::EmptyUrl);
        }

        if url == ":memory:" || url == "file::memory:" {
            return Ok(StorageLocation::Memory);
        }

        if REMOTE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Ok(StorageLocation::Remote(url.to_string()));
        }

        if let Some(rest) = url.strip_prefix("file:") {
            // file://<host>/<path>，只接受空主机或 localhost
            let path = match rest.strip_prefix("//") {
                Some(authority) => {
                    let (host, path) = authority
                        .find('/')
                        .map(|i| authority.split_at(i))
                        .unwrap_or((authority, ""));
                    if !host.is_empty() && host != "localhost" {
                        return Err(StorageError::FileHost(url.to_string()));
                    }
                    path
                }
                None => rest,
            };
            if path.is_empty() {
                return Err(StorageError::EmptyPath(url.to_string()));
            }
            return Ok(StorageLocation::File(PathBuf::from(path)));
        }

        let scheme = url.split(':').next().unwrap_or(url);
        Err(StorageError::UnsupportedScheme(scheme.to_string()))
    }

    /// 以显式的输出目录为基准解析文件路径
    ///
    /// 纯字符串拼接：不访问文件系统，`..` 不做规范化。
    pub fn resolve(&self, base_dir: &Path) -> Result<StorageLocation, StorageError> {
        match self.location()? {
            StorageLocation::File(path) if path.is_relative() => {
                Ok(StorageLocation::File(base_dir.join(path)))
            }
            other => Ok(other),
        }
    }
}

/// 记忆绑定 - 持有唯一的存储后端
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBinding {
    storage: StorageBackend,
}

impl MemoryBinding {
    pub fn new(storage: StorageBackend) -> Self {
        MemoryBinding { storage }
    }

    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_parses_relative_path() {
        let backend = StorageBackend::new("file:../mastra.db");
        assert_eq!(
            backend.location().unwrap(),
            StorageLocation::File(PathBuf::from("../mastra.db"))
        );
    }

    #[test]
    fn file_url_with_authority_slashes() {
        let backend = StorageBackend::new("file:///var/lib/telex.db");
        assert_eq!(
            backend.location().unwrap(),
            StorageLocation::File(PathBuf::from("/var/lib/telex.db"))
        );
    }

    #[test]
    fn file_url_authority_must_be_local() {
        assert_eq!(
            StorageBackend::new("file://localhost/var/lib/telex.db").location().unwrap(),
            StorageLocation::File(PathBuf::from("/var/lib/telex.db"))
        );
        assert_eq!(
            StorageBackend::new("file://dbhost/data/telex.db").location(),
            Err(StorageError::FileHost("file://dbhost/data/telex.db".to_string()))
        );
        assert_eq!(
            StorageBackend::new("file://").location(),
            Err(StorageError::EmptyPath("file://".to_string()))
        );
    }

    #[test]
    fn memory_and_remote_urls() {
        assert_eq!(
            StorageBackend::new(":memory:").location().unwrap(),
            StorageLocation::Memory
        );
        assert_eq!(
            StorageBackend::new("file::memory:").location().unwrap(),
            StorageLocation::Memory
        );
        assert_eq!(
            StorageBackend::new("libsql://db.example.turso.io").location().unwrap(),
            StorageLocation::Remote("libsql://db.example.turso.io".to_string())
        );
    }

    #[test]
    fn bad_urls_error_on_parse() {
        assert_eq!(StorageBackend::new("").location(), Err(StorageError::EmptyUrl));
        assert_eq!(
            StorageBackend::new("file:").location(),
            Err(StorageError::EmptyPath("file:".to_string()))
        );
        assert_eq!(
            StorageBackend::new("postgres://localhost/db").location(),
            Err(StorageError::UnsupportedScheme("postgres".to_string()))
        );
    }

    #[test]
    fn resolve_joins_relative_paths_onto_base() {
        let backend = StorageBackend::new("file:../mastra.db");
        let base = Path::new("/srv/app/.telex/output");
        assert_eq!(
            backend.resolve(base).unwrap(),
            StorageLocation::File(PathBuf::from("/srv/app/.telex/output/../mastra.db"))
        );
    }

    #[test]
    fn resolve_keeps_absolute_and_remote() {
        let base = Path::new("/ignored");
        assert_eq!(
            StorageBackend::new("file:/data/telex.db").resolve(base).unwrap(),
            StorageLocation::File(PathBuf::from("/data/telex.db"))
        );
        assert_eq!(
            StorageBackend::new("https://db.example.com").resolve(base).unwrap(),
            StorageLocation::Remote("https://db.example.com".to_string())
        );
    }

    #[test]
    fn binding_holds_equal_backend() {
        let backend = StorageBackend::new("file:../mastra.db");
        let binding = MemoryBinding::new(backend.clone());
        assert_eq!(binding.storage(), &backend);
    }
}
