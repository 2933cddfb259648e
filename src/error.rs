use bakecss::NamespaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StylebakeError {
    #[error("Compile error: {0}")]
    Compile(#[from] NamespaceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, StylebakeError>;
