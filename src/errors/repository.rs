use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RepositoryError {
    /// Entity not found
    #[error("Record not found: {0}")]
    NotFound(String),
}
