use crate::release_date::ReleaseDateError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} records exist")]
    EmptyCollection { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Inputted date has issues: {0}")]
    InvalidReleaseDate(#[from] ReleaseDateError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
