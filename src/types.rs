use crate::{
    errors::AppError, repositories::InMemoryUrlRecordRepository, services::UrlShortenerService,
};

/// Result type for request handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// The service as registered in the app data
pub type UrlShortenerServiceType = UrlShortenerService<InMemoryUrlRecordRepository>;

pub const WELCOME_MESSAGE: &str = "Welcome to URL shortener!";
