use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::config::Config;

use super::assistant::AssistantConfig;

/// 启动流程：构造一次配置，交给运行时
pub async fn bootstrap<R: AgentRuntime>(config: &Config, runtime: &mut R) -> Result<()> {
    config.validate()?;
    let assistant = config.assistant()?;

    info!(
        name = %assistant.name(),
        model = %assistant.model(),
        storage_url = %assistant.memory().storage().url(),
        output_dir = %config.memory.output_dir.display(),
        "assistant configured"
    );

    runtime.serve(assistant).await
}

/// 外部 Agent 运行时的接入点
///
/// 运行时拿到配置的所有权，之后的请求处理、模型调用、记忆读写都由它负责。
#[allow(async_fn_in_trait)]
pub trait AgentRuntime {
    async fn serve(&mut self, assistant: AssistantConfig) -> Result<()>;
}

/// 清单格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    #[default]
    Toml,
    Json,
}

/// 把配置序列化写出，供外部运行时进程读取
pub struct ManifestHandoff<W: Write> {
    writer: W,
    format: ManifestFormat,
}

impl<W: Write> ManifestHandoff<W> {
    pub fn new(writer: W, format: ManifestFormat) -> Self {
        ManifestHandoff { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, assistant: &AssistantConfig) -> Result<String> {
        let text = match self.format {
            ManifestFormat::Toml => {
                toml::to_string_pretty(assistant).context("序列化 TOML 清单失败")?
            }
            ManifestFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(assistant).context("序列化 JSON 清单失败")?;
                json.push('\n');
                json
            }
        };
        Ok(text)
    }
}

impl<W: Write> AgentRuntime for ManifestHandoff<W> {
    async fn serve(&mut self, assistant: AssistantConfig) -> Result<()> {
        let manifest = self.render(&assistant)?;
        debug!(format = ?self.format, bytes = manifest.len(), "manifest rendered");

        self.writer
            .write_all(manifest.as_bytes())
            .context("写出清单失败")?;
        self.writer.flush()?;

        info!(assistant = %assistant.name(), model = %assistant.model(), "assistant handed off");
        Ok(())
    }
}
