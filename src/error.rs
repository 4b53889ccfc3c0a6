use std::path::PathBuf;

use thiserror::Error;

use crate::core::ArrayKind;

pub type PlotlyResult<T> = Result<T, PlotlyError>;

/// Fallback text when the service reports a failure without a message.
pub const UNSPECIFIED_REMOTE_ERROR: &str = "An unspecified error occurred";

#[derive(Debug, Error)]
pub enum PlotlyError {
    #[error("unable to connect to API, no credentials have been supplied")]
    NoCredentials,

    #[error("badly formatted credentials file `{}`: {reason}", path.display())]
    Credentials { path: PathBuf, reason: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("{message}")]
    Remote { message: String },

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {context}: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported polymorphic shape: {shape} payloads are not accepted")]
    UnsupportedShape { shape: &'static str },

    #[error("kind mismatch at index {index}: expected {expected:?}, found {found:?}")]
    KindMismatch {
        index: usize,
        expected: ArrayKind,
        found: ArrayKind,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("i/o error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlotlyError {
    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn encode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            context: context.into(),
            source,
        }
    }

    /// Builds a remote failure from the optional error and warning strings the
    /// service returns, preferring the error text.
    #[must_use]
    pub fn remote(error: Option<&str>, warning: Option<&str>) -> Self {
        let message = [error, warning]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or(UNSPECIFIED_REMOTE_ERROR);
        Self::Remote {
            message: message.to_owned(),
        }
    }
}
