// src/services/url_record.rs - Business logic
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::ServiceError;
use crate::models::UrlRecord;
use crate::repositories::UrlRecordRepositoryTrait;
use crate::utils::id_generator;

type Result<T> = std::result::Result<T, ServiceError>;

#[async_trait]
pub trait UrlShortenerServiceTrait {
    /// Shortens `original_url` and returns its short ID.
    ///
    /// Shortening the same URL again returns the same ID and refreshes the
    /// stored `created_at`. Whether a record was created or replaced is not
    /// reported.
    async fn shorten(&self, original_url: String) -> Result<String>;

    /// Looks up the record stored under `id`.
    async fn resolve(&self, id: &str) -> Result<UrlRecord>;
}

pub struct UrlShortenerService<T: UrlRecordRepositoryTrait> {
    repository: Arc<T>,
}

impl<T: UrlRecordRepositoryTrait> UrlShortenerService<T> {
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<T: UrlRecordRepositoryTrait> UrlShortenerServiceTrait for UrlShortenerService<T> {
    async fn shorten(&self, original_url: String) -> Result<String> {
        let id = id_generator::generate_short_id(&original_url);
        let record = self
            .repository
            .save(UrlRecord::new(id, original_url))
            .await?;

        info!("Shortened '{}' to '{}'", record.original_url, record.id);
        Ok(record.id)
    }

    async fn resolve(&self, id: &str) -> Result<UrlRecord> {
        let record = self.repository.find_by_id(id).await.map_err(|e| {
            debug!("Lookup of '{}' failed: {}", id, e);
            ServiceError::from(e)
        })?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::errors::RepositoryError;
    use crate::repositories::{InMemoryUrlRecordRepository, MockUrlRecordRepositoryTrait};

    fn in_memory_service() -> UrlShortenerService<InMemoryUrlRecordRepository> {
        UrlShortenerService::new(Arc::new(InMemoryUrlRecordRepository::new()))
    }

    #[tokio::test]
    async fn test_shorten_then_resolve() {
        let service = in_memory_service();

        let id = service.shorten("https://a.com".to_string()).await.unwrap();
        assert_eq!(id, "66ccb499");

        let record = service.resolve(&id).await.unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.short_url, id);
        assert_eq!(record.original_url, "https://a.com");
    }

    #[tokio::test]
    async fn test_shorten_twice_keeps_id_and_refreshes_created_at() {
        let service = in_memory_service();
        let url = "https://example.com/page".to_string();

        let first_id = service.shorten(url.clone()).await.unwrap();
        let first = service.resolve(&first_id).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        let second_id = service.shorten(url).await.unwrap();
        let second = service.resolve(&second_id).await.unwrap();

        assert_eq!(first_id, second_id);
        assert!(second.created_at > first.created_at);
    }

    #[tokio::test]
    async fn test_shorten_empty_string() {
        let service = in_memory_service();

        let id = service.shorten(String::new()).await.unwrap();
        assert_eq!(id, "d41d8cd9");
        assert_eq!(service.resolve(&id).await.unwrap().original_url, "");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id() {
        let service = in_memory_service();
        service.shorten("https://a.com".to_string()).await.unwrap();

        let err = service.resolve("doesnotexist").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg.contains("doesnotexist")));
    }

    // Known limitation: truncated digests collide and the later URL silently
    // replaces the earlier one.
    #[tokio::test]
    async fn test_colliding_urls_overwrite_silently() {
        let service = in_memory_service();

        let first = service
            .shorten("https://example.com/1548".to_string())
            .await
            .unwrap();
        let second = service
            .shorten("https://example.com/2133".to_string())
            .await
            .unwrap();

        assert_eq!(first, second);
        let record = service.resolve(&first).await.unwrap();
        assert_eq!(record.original_url, "https://example.com/2133");
    }

    #[tokio::test]
    async fn test_shorten_saves_generated_record() {
        let mut repository = MockUrlRecordRepositoryTrait::new();
        repository
            .expect_save()
            .withf(|record| {
                record.id == "fb37c0eb"
                    && record.short_url == "fb37c0eb"
                    && record.original_url == "https://example.com/page"
            })
            .times(1)
            .returning(Ok);

        let service = UrlShortenerService::new(Arc::new(repository));
        let id = service
            .shorten("https://example.com/page".to_string())
            .await
            .unwrap();
        assert_eq!(id, "fb37c0eb");
    }

    #[tokio::test]
    async fn test_resolve_maps_repository_not_found() {
        let mut repository = MockUrlRecordRepositoryTrait::new();
        repository
            .expect_find_by_id()
            .withf(|id| id == "abcdef12")
            .times(1)
            .returning(|id| Err(RepositoryError::NotFound(id.to_string())));

        let service = UrlShortenerService::new(Arc::new(repository));
        let err = service.resolve("abcdef12").await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("No URL is registered under 'abcdef12'".to_string())
        );
    }
}
