//! Screen-controller logic shared by the HTTP routes.

use thiserror::Error;

use crate::pagination::PaginationError;
use crate::repository::errors::RepositoryError;

pub mod main;
pub mod teachers;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
