pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;

pub use agent::{
    bootstrap, telex_assistant, AgentRuntime, AssistantConfig, ManifestFormat, ManifestHandoff,
    MemoryBinding, StorageBackend, StorageLocation,
};
pub use cli::run_cli;
pub use config::Config;
