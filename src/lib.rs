//! # ollama-lib-rust
//!
//! Blocking client for an Ollama-style inference backend: single-turn
//! completion, multi-turn chat and embedding extraction over JSON/HTTP.
//!
//! ## Overview
//!
//! Text and chat requests share a small capability contract
//! ([`ModelRequest`] / [`ModelResponse`]) and a single dispatch entry point
//! ([`OllamaClient::query`]) that routes on the closed [`Request`] sum.
//! Embeddings have their own operation ([`OllamaClient::embed`]) because a
//! list of vectors does not fit the single-text response contract.
//!
//! Every call is one synchronous round trip with its own HTTP client. The
//! library never retries; see [`Error::is_retryable`] for a caller-side hint.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ollama_lib_rust::{ChatMessage, ModelEndpoint, ModelResponse, OllamaClient};
//!
//! fn main() -> ollama_lib_rust::Result<()> {
//!     let endpoint = ModelEndpoint::new("http://127.0.0.1:11434", "llama3:latest")?;
//!     let client = OllamaClient::new(endpoint.clone());
//!
//!     let reply = client.query(endpoint.text_request("Say hi").into())?;
//!     println!("{}", reply.message());
//!
//!     let chat = endpoint.chat_request(vec![ChatMessage::user("hi there")]);
//!     println!("{}", client.chat(&chat)?.message.content);
//!
//!     let vectors = client.embed(&endpoint.embedding_request(vec!["hello".into()]))?;
//!     println!("{} dims", vectors.dimensions());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Endpoint configuration, dispatcher and the three operations |
//! | [`contract`] | Capability traits and the `Request`/`Response` sums |
//! | [`transport`] | Blocking HTTP POST, status check and decoding |
//! | [`types`] | Wire payloads for generate, chat and embed |

pub mod client;
pub mod contract;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{InferenceBackend, ModelEndpoint, ModelEndpointBuilder, OllamaClient};
pub use contract::{ModelRequest, ModelResponse, Request, Response};
pub use error::{ConfigContext, ConfigOrigin, Error};
pub use transport::TransportError;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse, KeepAlive,
    MessageRole, ModelOptions, OptionValue, ResponseFormat, TextRequest, TextResponse,
    ToolCall, ToolDefinition,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
