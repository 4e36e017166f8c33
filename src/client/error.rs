use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("route {route} needs a parent id")]
    MissingParent { route: String },
    #[error("base url {base_url} cannot carry a path")]
    InvalidBaseUrl { base_url: String },
}
