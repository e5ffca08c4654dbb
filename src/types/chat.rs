//! Multi-turn chat shapes for `/api/chat`.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use super::options::{KeepAlive, ModelOptions, ResponseFormat};
use super::tool::ToolDefinition;

/// Chat request. `messages` is kept in conversation order and never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ResponseFormat>,
    #[serde(default, skip_serializing_if = "ModelOptions::is_empty")]
    pub options: ModelOptions,
    #[serde(default)]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<KeepAlive>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: Vec::new(),
            format: None,
            options: ModelOptions::new(),
            stream: false,
            keep_alive: Some(KeepAlive::minutes(5)),
        }
    }

    /// Append a turn at the end of the conversation.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_options(mut self, options: ModelOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: KeepAlive) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }
}

/// Chat reply. Missing fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    pub model: String,
    pub message: ChatMessage,
    pub created_at: String,
    pub done: bool,
    pub done_reason: String,
    pub prompt_eval_count: u64,
    /// Raw `prompt_eval` value when a backend sends one. Kept untyped so it
    /// can sit next to `prompt_eval_count` in the same reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval: Option<serde_json::Value>,
    pub prompt_eval_duration: u64,
    pub eval_count: u64,
    pub eval_duration: u64,
    pub total_duration: u64,
    pub load_duration: u64,
}
