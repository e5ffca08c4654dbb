//! Blocking HTTP transport.
//!
//! One call is one POST: a fresh client, JSON in, JSON (or newline-delimited
//! JSON when streaming) out. Nothing is shared between calls.

mod http;
mod stream;

pub use http::{HttpTransport, TransportError};
pub use stream::StreamChunk;
