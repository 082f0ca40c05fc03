use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbedError>;

/// Transport-level failures from the external model providers. Converted to
/// the engine's domain error at the crate boundary.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Missing API key: {0} is not set")]
    MissingApiKey(&'static str),

    #[error("Empty response from model")]
    EmptyResponse,
}
