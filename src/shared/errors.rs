use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid navigation mode: {0} (expected \"full-reload\" or \"in-app\")")]
    InvalidNavigationMode(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
