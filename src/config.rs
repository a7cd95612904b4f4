use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::agent::{
    AssistantConfig, MemoryBinding, StorageBackend, StorageLocation, DEFAULT_ASSISTANT_NAME,
    DEFAULT_MODEL, DEFAULT_STORAGE_URL, TELEX_INSTRUCTIONS,
};
use crate::error::ConfigError;
use crate::logger;

fn telex_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".telex")
}

/// 助手配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub name: String,
    pub model: String,
    /// 覆盖内置系统提示的文件
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions_file: Option<PathBuf>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        AssistantSettings {
            name: DEFAULT_ASSISTANT_NAME.to_string(),
            model: std::env::var("TELEX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            instructions_file: None,
        }
    }
}

/// 记忆存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySettings {
    pub storage_url: String,
    /// 相对存储路径的基准目录
    pub output_dir: PathBuf,
}

impl Default for MemorySettings {
    fn default() -> Self {
        MemorySettings {
            storage_url: std::env::var("TELEX_STORAGE_URL")
                .unwrap_or_else(|_| DEFAULT_STORAGE_URL.to_string()),
            output_dir: std::env::var("TELEX_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| telex_home().join("output")),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: std::env::var("TELEX_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

/// 统一配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub memory: MemorySettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Config {
    /// 从文件加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败：{}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败：{}", path.display()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        telex_home().join("config.toml")
    }

    /// 从默认位置加载配置
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assistant.name.trim().is_empty() {
            return Err(ConfigError::Invalid("assistant.name must not be empty".into()));
        }
        if self.assistant.model.trim().is_empty() {
            return Err(ConfigError::Invalid("assistant.model must not be empty".into()));
        }
        if self.memory.storage_url.is_empty() {
            return Err(ConfigError::Invalid("memory.storage_url must not be empty".into()));
        }
        logger::filter(&self.log.level)?;
        Ok(())
    }

    /// 系统提示：优先读取 instructions_file
    pub fn instructions(&self) -> Result<String> {
        match &self.assistant.instructions_file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("读取系统提示失败：{}", path.display())),
            None => Ok(TELEX_INSTRUCTIONS.to_string()),
        }
    }

    /// 构造交给运行时的助手配置
    pub fn assistant(&self) -> Result<AssistantConfig> {
        Ok(AssistantConfig::new(
            self.assistant.name.clone(),
            self.instructions()?,
            self.assistant.model.clone(),
            MemoryBinding::new(StorageBackend::new(self.memory.storage_url.clone())),
        ))
    }

    /// 以 output_dir 为基准解析存储位置
    pub fn storage_location(&self) -> Result<StorageLocation, ConfigError> {
        let backend = StorageBackend::new(self.memory.storage_url.clone());
        Ok(backend.resolve(&self.memory.output_dir)?)
    }
}
