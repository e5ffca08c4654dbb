use crate::transport::TransportError;
use std::fmt;
use thiserror::Error;

/// Where a rejected setting was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Builder,
    Env,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigOrigin::Builder => "builder",
            ConfigOrigin::Env => "env",
        })
    }
}

/// The endpoint setting a configuration error refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigContext {
    /// `endpoint.model`, `endpoint.base_url` or an environment variable name.
    pub setting: String,
    /// The rejected input, when there was one.
    pub value: Option<String>,
    pub origin: ConfigOrigin,
}

impl ConfigContext {
    pub fn builder(setting: impl Into<String>) -> Self {
        Self {
            setting: setting.into(),
            value: None,
            origin: ConfigOrigin::Builder,
        }
    }

    pub fn env(var: impl Into<String>) -> Self {
        Self {
            setting: var.into(),
            value: None,
            origin: ConfigOrigin::Env,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// Renders as `endpoint.base_url="ftp://x" from builder`.
impl fmt::Display for ConfigContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.setting)?;
        if let Some(value) = &self.value {
            write!(f, "={:?}", value)?;
        }
        write!(f, " from {}", self.origin)
    }
}

/// Unified error type for the client.
///
/// Every variant is terminal for the call that produced it: the library never
/// retries. [`Error::is_retryable`] is a hint for caller-owned retry wrappers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error {status_line} received")]
    Status {
        status: u16,
        status_line: String,
        /// Raw reply body, kept verbatim and never interpreted.
        body: Option<String>,
    },

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Unsupported request variant: {variant}")]
    UnsupportedRequest { variant: String },

    #[error("Configuration error: {message} ({context})")]
    Configuration {
        message: String,
        context: ConfigContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn configuration(msg: impl Into<String>, context: ConfigContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn unsupported(variant: impl Into<String>) -> Self {
        Error::UnsupportedRequest {
            variant: variant.into(),
        }
    }

    /// HTTP status of a non-200 reply, if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Encode, decode, configuration and dispatch errors are deterministic.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Status { status, .. } => *status >= 500,
            Error::Encode(_)
            | Error::Decode(_)
            | Error::UnsupportedRequest { .. }
            | Error::Configuration { .. }
            | Error::Io(_) => false,
        }
    }

    /// The offending setting of a configuration error.
    pub fn context(&self) -> Option<&ConfigContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
