use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod day_off;
pub mod overtime;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request parameters are out of range or malformed.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
