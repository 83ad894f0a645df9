use std::sync::Arc;

use crate::query_key::RequestIdentity;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors are `Clone` so a single fetch outcome can be handed to every waiter.
#[derive(thiserror::Error, Clone, Debug)]
pub enum Error {
    #[error("No player name or id found in request")]
    MissingParameter,

    #[error("invalid player payload: {0}")]
    InvalidPayloadShape(String),

    #[error("{0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("JSON decoding error: {0}")]
    Decode(#[source] Arc<serde_json::Error>),

    #[error("player fetch did not complete: {0}")]
    FetchAborted(String),

    #[error("Failed to query for this player ({0})")]
    PlayerNotResolvable(RequestIdentity),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("invalid player service endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid setting {var}: {reason}")]
    InvalidSetting { var: String, reason: String },
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(Arc::new(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(Arc::new(e))
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}
