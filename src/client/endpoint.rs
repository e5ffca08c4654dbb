//! Endpoint configuration and request constructors bound to it

use crate::types::{ChatMessage, ChatRequest, EmbeddingRequest, TextRequest};
use crate::{ConfigContext, Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Default local backend address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";

/// Address of a backend plus the model requests are issued against.
///
/// A plain configuration value: cloning it is cheap and it holds no
/// connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEndpoint {
    base_url: String,
    model: String,
    chat_session: bool,
    timeout: Option<Duration>,
}

impl ModelEndpoint {
    /// Validate and build an endpoint. The model must be non-empty and the
    /// base URL an absolute http(s) address.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::builder(model).base_url(base_url).build()
    }

    pub fn builder(model: impl Into<String>) -> ModelEndpointBuilder {
        ModelEndpointBuilder::new(model)
    }

    /// Build from the environment.
    ///
    /// - `OLLAMA_HOST`: backend address, `http://` is assumed when no scheme is given
    /// - `OLLAMA_HTTP_TIMEOUT_SECS`: per-call timeout, none when unset
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let mut builder = Self::builder(model);
        if let Ok(host) = env::var("OLLAMA_HOST") {
            let host = host.trim();
            if !host.is_empty() {
                builder = builder.base_url(if host.contains("://") {
                    host.to_string()
                } else {
                    format!("http://{}", host)
                });
            }
        }
        if let Ok(raw) = env::var("OLLAMA_HTTP_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration(
                    "timeout must be a whole number of seconds",
                    ConfigContext::env("OLLAMA_HTTP_TIMEOUT_SECS").with_value(raw.clone()),
                )
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_chat_session(&self) -> bool {
        self.chat_session
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL for an API path such as `/api/chat`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Completion request with `stream = false`, `raw = false` and
    /// `temperature = 0.0`.
    pub fn text_request(&self, prompt: impl Into<String>) -> TextRequest {
        TextRequest::new(self.model.clone(), prompt)
    }

    /// Chat request with `keep_alive = 5m`, no tools and empty options.
    pub fn chat_request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest::new(self.model.clone(), messages)
    }

    pub fn embedding_request(&self, input: Vec<String>) -> EmbeddingRequest {
        EmbeddingRequest::new(self.model.clone(), input)
    }
}

/// Builder for [`ModelEndpoint`].
pub struct ModelEndpointBuilder {
    base_url: Option<String>,
    model: String,
    chat_session: bool,
    timeout: Option<Duration>,
}

impl ModelEndpointBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            base_url: None,
            model: model.into(),
            chat_session: false,
            timeout: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn chat_session(mut self, enable: bool) -> Self {
        self.chat_session = enable;
        self
    }

    /// Per-call deadline. Without one a call blocks until the backend replies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ModelEndpoint> {
        let model = self.model.trim().to_string();
        if model.is_empty() {
            return Err(Error::configuration(
                "model must not be empty",
                ConfigContext::builder("endpoint.model"),
            ));
        }

        let raw = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(raw.trim()).map_err(|e| {
            Error::configuration(
                format!("invalid base URL: {}", e),
                ConfigContext::builder("endpoint.base_url").with_value(raw.clone()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(Error::configuration(
                "base URL must be an absolute http(s) address",
                ConfigContext::builder("endpoint.base_url").with_value(raw),
            ));
        }

        Ok(ModelEndpoint {
            base_url: raw.trim().trim_end_matches('/').to_string(),
            model,
            chat_session: self.chat_session,
            timeout: self.timeout,
        })
    }
}
