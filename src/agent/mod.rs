pub mod assistant;
pub mod instructions;
pub mod memory;
pub mod runtime;

pub use assistant::{telex_assistant, AssistantConfig};
pub use instructions::{DEFAULT_ASSISTANT_NAME, DEFAULT_MODEL, DEFAULT_STORAGE_URL, TELEX_INSTRUCTIONS};
pub use memory::{MemoryBinding, StorageBackend, StorageError, StorageLocation};
pub use runtime::{bootstrap, AgentRuntime, ManifestFormat, ManifestHandoff};
