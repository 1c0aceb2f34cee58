use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The variable is set but holds bytes that are not valid unicode.
    #[error("Environment variable {key} is not valid unicode")]
    NotUnicode { key: String },

    /// The variable (or its default) could not be parsed into the expected type.
    #[error("Could not parse {key}: {reason}")]
    Parse { key: String, reason: String },
}
