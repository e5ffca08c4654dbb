//! Capability contract shared by text and chat variants.
//!
//! Generic callers (logging, auditing, retry wrappers) can inspect what was
//! asked and what came back through [`ModelRequest`] and [`ModelResponse`]
//! without matching on the concrete type. Dispatch itself goes through the
//! closed [`Request`] and [`Response`] sums.
//!
//! Embeddings are deliberately outside this contract: their reply is a list
//! of vectors, not a single text payload.

use crate::types::{ChatRequest, ChatResponse, TextRequest, TextResponse};

/// What was asked.
pub trait ModelRequest {
    /// Model the request targets. Never empty for requests built from an endpoint.
    fn model(&self) -> &str;

    /// Textual inputs in order: the prompt for a completion, every message
    /// content in conversation order for a chat.
    fn messages(&self) -> Vec<&str>;

    /// Classify into a dispatchable variant. Implementations outside this
    /// crate keep the default and are rejected by the dispatcher.
    fn to_request(&self) -> Option<Request> {
        None
    }
}

/// What came back.
pub trait ModelResponse {
    fn model(&self) -> &str;

    /// The single generated text payload.
    fn message(&self) -> &str;
}

impl ModelRequest for TextRequest {
    fn model(&self) -> &str {
        &self.model
    }

    fn messages(&self) -> Vec<&str> {
        vec![self.prompt.as_str()]
    }

    fn to_request(&self) -> Option<Request> {
        Some(Request::Text(self.clone()))
    }
}

impl ModelRequest for ChatRequest {
    fn model(&self) -> &str {
        &self.model
    }

    fn messages(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }

    fn to_request(&self) -> Option<Request> {
        Some(Request::Chat(self.clone()))
    }
}

impl ModelResponse for TextResponse {
    fn model(&self) -> &str {
        &self.model
    }

    fn message(&self) -> &str {
        &self.response
    }
}

impl ModelResponse for ChatResponse {
    fn model(&self) -> &str {
        &self.model
    }

    fn message(&self) -> &str {
        &self.message.content
    }
}

/// Every request the dispatcher can route.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Text(TextRequest),
    Chat(ChatRequest),
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Text(_) => "text",
            Request::Chat(_) => "chat",
        }
    }
}

impl From<TextRequest> for Request {
    fn from(request: TextRequest) -> Self {
        Request::Text(request)
    }
}

impl From<ChatRequest> for Request {
    fn from(request: ChatRequest) -> Self {
        Request::Chat(request)
    }
}

impl ModelRequest for Request {
    fn model(&self) -> &str {
        match self {
            Request::Text(r) => r.model(),
            Request::Chat(r) => r.model(),
        }
    }

    fn messages(&self) -> Vec<&str> {
        match self {
            Request::Text(r) => r.messages(),
            Request::Chat(r) => r.messages(),
        }
    }

    fn to_request(&self) -> Option<Request> {
        Some(self.clone())
    }
}

/// Reply matching the [`Request`] variant that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(TextResponse),
    Chat(ChatResponse),
}

impl Response {
    pub fn into_text(self) -> Option<TextResponse> {
        match self {
            Response::Text(r) => Some(r),
            Response::Chat(_) => None,
        }
    }

    pub fn into_chat(self) -> Option<ChatResponse> {
        match self {
            Response::Chat(r) => Some(r),
            Response::Text(_) => None,
        }
    }
}

impl ModelResponse for Response {
    fn model(&self) -> &str {
        match self {
            Response::Text(r) => r.model(),
            Response::Chat(r) => r.model(),
        }
    }

    fn message(&self) -> &str {
        match self {
            Response::Text(r) => r.message(),
            Response::Chat(r) => r.message(),
        }
    }
}
