use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    TodoNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
