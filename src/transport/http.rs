use crate::client::ModelEndpoint;
use crate::{Error, Result};
use reqwest::header::{ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::stream::{fold_ndjson, StreamChunk};

pub struct HttpTransport {
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(endpoint: &ModelEndpoint) -> Self {
        Self {
            base_url: endpoint.base_url().to_string(),
            timeout: endpoint.timeout(),
        }
    }

    /// POST `request` to `path` and decode a single JSON reply. `model` is
    /// only recorded on the request's log events.
    pub fn post<Req, Resp>(&self, path: &str, model: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = self.execute(path, model, request)?;
        serde_json::from_str(&body).map_err(Error::Decode)
    }

    /// POST `request` to `path` and fold a newline-delimited JSON reply into
    /// one value. A single malformed line fails the whole call.
    pub fn post_streamed<Req, Resp>(&self, path: &str, model: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: StreamChunk,
    {
        let body = self.execute(path, model, request)?;
        fold_ndjson(&body)
    }

    fn execute<Req: Serialize>(&self, path: &str, model: &str, request: &Req) -> Result<String> {
        let payload = serde_json::to_vec(request).map_err(Error::Encode)?;
        let url = format!("{}{}", self.base_url, path);

        // `None` disables reqwest's default blocking timeout.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        debug!(path, model, bytes = payload.len(), "ollama request started");
        let start = Instant::now();

        let response = client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(ACCEPT_CHARSET, "utf-8")
            .body(payload)
            .send()
            .map_err(TransportError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().ok().filter(|b| !b.is_empty());
            warn!(
                path,
                model,
                http_status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "ollama request failed"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                status_line: status.to_string(),
                body,
            });
        }

        let body = response.text().map_err(TransportError::Http)?;
        debug!(
            path,
            model,
            http_status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "ollama request completed"
        );
        Ok(body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
