use thiserror::Error;

use super::RepositoryError;

#[derive(Error, Debug, PartialEq)]
pub enum ServiceError {
    /// No record is stored under the requested short ID
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(format!(
                "No URL is registered under '{}'",
                id
            )),
        }
    }
}
