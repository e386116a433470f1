pub mod clients;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures a service operation can surface to the HTTP boundary.
///
/// Configuration and store failures stay distinguishable here even though the
/// route layer renders both as a generic `500`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("DATABASE_URL not configured")]
    NotConfigured,

    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
