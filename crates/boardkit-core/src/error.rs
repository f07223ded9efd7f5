use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transaction rejected: {0}")]
    Transaction(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Whether the error indicates a missing or inaccessible entity.
    /// Boards owned by another user report as not-found rather than
    /// revealing their existence.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BoardError::NotFound(_))
    }
}
