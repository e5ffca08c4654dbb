use crate::contract::{ModelRequest, Request, Response};
use crate::transport::HttpTransport;
use crate::types::{
    ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse, TextRequest, TextResponse,
};
use crate::{Error, Result};
use tracing::debug;

use super::endpoint::ModelEndpoint;

pub const GENERATE_PATH: &str = "/api/generate";
pub const CHAT_PATH: &str = "/api/chat";
pub const EMBED_PATH: &str = "/api/embed";

/// Anything that can answer text/chat queries and embedding requests.
///
/// [`OllamaClient`] is the HTTP implementation; wrappers (retry, audit,
/// caching) and test doubles implement the same seam.
pub trait InferenceBackend {
    fn query(&self, request: Request) -> Result<Response>;

    fn embed(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse>;
}

/// Blocking client for one backend endpoint.
///
/// Holds configuration only. Each call builds its own HTTP client, so a
/// single `OllamaClient` can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    endpoint: ModelEndpoint,
}

impl OllamaClient {
    pub fn new(endpoint: ModelEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &ModelEndpoint {
        &self.endpoint
    }

    /// Route a request to the operation matching its variant.
    pub fn query(&self, request: Request) -> Result<Response> {
        debug!(
            kind = request.kind(),
            model = request.model(),
            "dispatching request"
        );
        match request {
            Request::Text(r) => self.generate(&r).map(Response::Text),
            Request::Chat(r) => self.chat(&r).map(Response::Chat),
        }
    }

    /// Dispatch any [`ModelRequest`]. Implementations that are neither a
    /// text nor a chat request fail with [`Error::UnsupportedRequest`]
    /// before any network activity.
    pub fn dispatch(&self, request: &dyn ModelRequest) -> Result<Response> {
        let resolved = request.to_request().ok_or_else(|| {
            Error::unsupported(format!(
                "neither text nor chat (model '{}')",
                request.model()
            ))
        })?;
        self.query(resolved)
    }

    /// Single-turn completion via `/api/generate`.
    pub fn generate(&self, request: &TextRequest) -> Result<TextResponse> {
        let transport = HttpTransport::new(&self.endpoint);
        let mut response: TextResponse = if request.stream {
            transport.post_streamed(GENERATE_PATH, &request.model, request)?
        } else {
            transport.post(GENERATE_PATH, &request.model, request)?
        };
        if response.model.is_empty() {
            response.model = request.model.clone();
        }
        Ok(response)
    }

    /// Multi-turn chat via `/api/chat`.
    pub fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let transport = HttpTransport::new(&self.endpoint);
        let mut response: ChatResponse = if request.stream {
            transport.post_streamed(CHAT_PATH, &request.model, request)?
        } else {
            transport.post(CHAT_PATH, &request.model, request)?
        };
        if response.model.is_empty() {
            response.model = request.model.clone();
        }
        Ok(response)
    }

    /// Embedding extraction via `/api/embed`. Not reachable through
    /// [`query`](Self::query).
    pub fn embed(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        debug!(
            model = request.model.as_str(),
            inputs = request.input.len(),
            "requesting embeddings"
        );
        let mut response: EmbeddingResponse =
            HttpTransport::new(&self.endpoint).post(EMBED_PATH, &request.model, request)?;
        if response.model.is_empty() {
            response.model = request.model.clone();
        }
        Ok(response)
    }
}

impl InferenceBackend for OllamaClient {
    fn query(&self, request: Request) -> Result<Response> {
        OllamaClient::query(self, request)
    }

    fn embed(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        OllamaClient::embed(self, request)
    }
}
