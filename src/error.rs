use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(value: url::ParseError) -> Self {
        Self::Transport(format!("invalid request url: {value}"))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("endpoint {0:?} must not carry a query or fragment")]
    EndpointHasQuery(String),
}

#[derive(Error, Debug)]
pub enum AttachError {
    #[error("no text input with id {0:?}")]
    MissingInput(String),
    #[error("no button with id {0:?}")]
    MissingButton(String),
    #[error("no container with id {0:?}")]
    MissingContainer(String),
}

/// Tagged result of one request/render cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    Rendered(usize),
    Failed(FetchError),
}

impl CycleOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, CycleOutcome::Rendered(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            CycleOutcome::Failed(e) => Some(e),
            CycleOutcome::Rendered(_) => None,
        }
    }
}
