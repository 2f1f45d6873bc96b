use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while configuring the client or making a call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} must be set to a non-empty value")]
    MissingCredential(&'static str),

    #[error("invalid RPC url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("RPC method name must not be empty")]
    EmptyMethod,

    #[error("{method}: failed to serialize params: {source}")]
    Params {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{method}: endpoint returned HTTP {status}")]
    Http {
        method: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{method}: no response within {timeout:?}")]
    Timeout { method: String, timeout: Duration },

    #[error("{method}: request failed: {source}")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method}: expected a JSON object, got {body}")]
    NotAnObject { method: String, body: String },

    #[error("{method}: response body is not valid JSON: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// True for problems detected before any request is sent.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential(_)
                | Error::InvalidUrl { .. }
                | Error::ZeroTimeout
                | Error::Client(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
