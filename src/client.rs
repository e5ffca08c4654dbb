//! Client for the generate, chat and embed operations.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod core;
pub mod endpoint;

pub use self::core::{InferenceBackend, OllamaClient, CHAT_PATH, EMBED_PATH, GENERATE_PATH};
pub use endpoint::{ModelEndpoint, ModelEndpointBuilder, DEFAULT_BASE_URL};
