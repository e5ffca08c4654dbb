use crate::types::{ChatResponse, TextResponse};
use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// A reply shape the backend can split into newline-delimited chunks.
pub trait StreamChunk: DeserializeOwned {
    /// Fold `next` into `self`: text is appended, metadata comes from the
    /// later chunk.
    fn merge(self, next: Self) -> Self;
}

impl StreamChunk for TextResponse {
    fn merge(self, next: Self) -> Self {
        let mut response = self.response;
        response.push_str(&next.response);
        Self {
            model: if next.model.is_empty() {
                self.model
            } else {
                next.model
            },
            response,
            ..next
        }
    }
}

impl StreamChunk for ChatResponse {
    fn merge(self, next: Self) -> Self {
        let mut message = self.message;
        message.content.push_str(&next.message.content);
        message.images.extend(next.message.images);
        message.tool_calls.extend(next.message.tool_calls);
        Self {
            model: if next.model.is_empty() {
                self.model
            } else {
                next.model
            },
            message,
            ..next
        }
    }
}

pub(crate) fn fold_ndjson<T: StreamChunk>(body: &str) -> Result<T> {
    let mut lines = body.lines().map(str::trim).filter(|l| !l.is_empty());
    // An empty body still surfaces as a decode error.
    let first = serde_json::from_str::<T>(lines.next().unwrap_or_default()).map_err(Error::Decode)?;
    lines.try_fold(first, |acc, line| -> Result<T> {
        let chunk = serde_json::from_str::<T>(line).map_err(Error::Decode)?;
        Ok(acc.merge(chunk))
    })
}
