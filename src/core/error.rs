use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid document path '{0}': {1}")]
    InvalidPath(String, String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
