use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::ValidationError(format!("Malformed dataset: {err}"))
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::DatasetError(format!("Failed to read dataset: {err}"))
    }
}
