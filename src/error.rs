use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Bad user input, caught before any request is sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("invalid endpoint URL `{0}`")]
    Endpoint(String),
    #[error("invalid URLs:\n{}", .0.join("\n"))]
    Urls(Vec<String>),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("status code error: {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to decode JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response data is missing key `{0}`")]
    Schema(String),
    #[error("no content could be fetched, check the URLs and the API key")]
    NoContent,
    #[error("{failed} of {total} URLs failed")]
    Incomplete { failed: usize, total: usize },
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "ValidationError",
            Error::Fetch(_) => "FetchError",
            Error::Parse(_) => "ParseError",
            Error::Schema(_) => "SchemaError",
            Error::NoContent => "NoContentError",
            Error::Incomplete { .. } => "IncompleteError",
        }
    }
}
