use serde::{Deserialize, Serialize};

use super::instructions::{DEFAULT_ASSISTANT_NAME, DEFAULT_MODEL, TELEX_INSTRUCTIONS};
use super::memory::{MemoryBinding, StorageBackend};

/// 助手配置 - 构造后不可变，交给外部运行时使用
///
/// 构造时不做任何校验或 I/O，字段原样保存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    name: String,
    instructions: String,
    model: String,
    memory: MemoryBinding,
}

impl AssistantConfig {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: impl Into<String>,
        memory: MemoryBinding,
    ) -> Self {
        AssistantConfig {
            name: name.into(),
            instructions: instructions.into(),
            model: model.into(),
            memory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn memory(&self) -> &MemoryBinding {
        &self.memory
    }

    /// `provider/model` 形式中的提供方，没有 `/` 时为 None
    pub fn model_provider(&self) -> Option<&str> {
        self.model.split_once('/').map(|(provider, _)| provider)
    }

    /// 去掉提供方前缀后的模型名
    pub fn model_name(&self) -> &str {
        self.model
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.model)
    }
}

/// 构造 Telex Helper 预设
pub fn telex_assistant(storage_url: impl Into<String>) -> AssistantConfig {
    AssistantConfig::new(
        DEFAULT_ASSISTANT_NAME,
        TELEX_INSTRUCTIONS,
        DEFAULT_MODEL,
        MemoryBinding::new(StorageBackend::new(storage_url)),
    )
}
