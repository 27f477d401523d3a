//! Form definitions backing the teacher routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod filters;
pub mod teachers;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid page number")]
    InvalidPage,

    #[error("invalid teacher id")]
    InvalidTeacherId,

    #[error("unknown action")]
    InvalidAction,
}
