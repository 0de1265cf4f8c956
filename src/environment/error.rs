use thiserror::Error;

/// Failures of a single call against the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API Error: {call} transport failure: {source}")]
    Transport {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("API Error: {call} returned status {status}")]
    Status { call: &'static str, status: u16 },

    #[error("API Error: {call} malformed response: {source}")]
    Decode {
        call: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("API Error: {call} invalid url: {source}")]
    InvalidUrl {
        call: &'static str,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    pub fn call(&self) -> &'static str {
        match self {
            ApiError::Transport { call, .. }
            | ApiError::Status { call, .. }
            | ApiError::Decode { call, .. }
            | ApiError::InvalidUrl { call, .. } => call,
        }
    }
}
