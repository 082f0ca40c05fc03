use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset not found in any candidate location")]
    DatasetNotFound,

    #[error("Dataset not loaded")]
    DatasetNotLoaded,

    #[error("Dataset parse error: {0}")]
    DatasetParse(String),

    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Service not ready")]
    NotReady,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
