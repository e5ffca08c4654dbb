//! Wire types for the three backend operations.
//!
//! | Module | Endpoint | Types |
//! |--------|----------|-------|
//! | [`generate`] | `/api/generate` | [`TextRequest`], [`TextResponse`] |
//! | [`chat`] | `/api/chat` | [`ChatRequest`], [`ChatResponse`] |
//! | [`embed`] | `/api/embed` | [`EmbeddingRequest`], [`EmbeddingResponse`] |
//!
//! Shared pieces live in [`message`], [`options`] and [`tool`]. Every
//! response type decodes missing fields to their zero value and ignores
//! fields it does not know, so newer backends never break decoding.

pub mod chat;
pub mod embed;
pub mod generate;
pub mod message;
pub mod options;
pub mod tool;

pub use chat::{ChatRequest, ChatResponse};
pub use embed::{EmbeddingRequest, EmbeddingResponse};
pub use generate::{TextRequest, TextResponse};
pub use message::{ChatMessage, MessageRole};
pub use options::{KeepAlive, ModelOptions, OptionValue, ResponseFormat};
pub use tool::{FunctionDefinition, ToolCall, ToolCallFunction, ToolDefinition};
