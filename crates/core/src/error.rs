use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("path has no file name: {0}")]
    MissingFileName(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("limit must be positive, got {0}")]
    InvalidLimit(usize),

    #[error("entry source failed: {0}")]
    Source(String),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
