// src/repositories/url_record.rs - Data access
use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use crate::errors::RepositoryError;
use crate::models::UrlRecord;

type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRecordRepositoryTrait: Send + Sync {
    /// Stores a record under its `id`, replacing whatever was stored there
    ///
    /// ### Arguments
    /// * `record` - The record to store
    ///
    /// ### Returns
    /// * `Result<UrlRecord>` - The record as stored
    async fn save(&self, record: UrlRecord) -> Result<UrlRecord>;

    /// Finds a record by its short ID
    ///
    /// ### Arguments
    /// * `id` - The short ID to look up
    ///
    /// ### Returns
    /// * `Result<UrlRecord>` - The stored record
    ///
    /// ### Errors
    /// * `RepositoryError::NotFound` - If nothing is stored under `id`
    async fn find_by_id(&self, id: &str) -> Result<UrlRecord>;
}

// Process-lifetime store, never persisted. DashMap shards its locks, so
// concurrent writers are serialized per key and completed writes are
// visible to every later reader.
#[derive(Debug, Default)]
pub struct InMemoryUrlRecordRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryUrlRecordRepository {
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl UrlRecordRepositoryTrait for InMemoryUrlRecordRepository {
    async fn save(&self, record: UrlRecord) -> Result<UrlRecord> {
        // No collision check: a different URL with the same id is overwritten.
        if let Some(previous) = self.storage.insert(record.id.clone(), record.clone()) {
            debug!(
                "Replaced record '{}' ({} -> {})",
                record.id, previous.original_url, record.original_url
            );
        }

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<UrlRecord> {
        self.storage
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;

    fn record(id: &str, url: &str) -> UrlRecord {
        UrlRecord::new(id.to_string(), url.to_string())
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryUrlRecordRepository::new();
        assert!(repo.is_empty());

        let saved = repo.save(record("66ccb499", "https://a.com")).await.unwrap();
        let found = repo.find_by_id("66ccb499").await.unwrap();

        assert_eq!(found, saved);
        assert_eq!(found.original_url, "https://a.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = InMemoryUrlRecordRepository::new();
        repo.save(record("66ccb499", "https://a.com")).await.unwrap();

        let err = repo.find_by_id("doesnotexist").await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound("doesnotexist".to_string()));
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let repo = InMemoryUrlRecordRepository::new();
        let earlier = Utc::now() - chrono::Duration::hours(1);

        let mut first = record("7f17b0c9", "https://example.com/1548");
        first.created_at = earlier;
        repo.save(first).await.unwrap();
        repo.save(record("7f17b0c9", "https://example.com/2133"))
            .await
            .unwrap();

        let found = repo.find_by_id("7f17b0c9").await.unwrap();
        assert_eq!(found.original_url, "https://example.com/2133");
        assert!(found.created_at > earlier);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_and_readers() {
        let repo = Arc::new(InMemoryUrlRecordRepository::new());
        let mut handles = Vec::new();

        for i in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let id = format!("id-{:03}", i);
                repo.save(record(&id, &format!("https://example{}.com", i)))
                    .await
                    .unwrap();
                // A completed write is visible to the writer's own read.
                let found = repo.find_by_id(&id).await.unwrap();
                assert_eq!(found.original_url, format!("https://example{}.com", i));
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.len(), 50);
        for i in 0..50 {
            let found = repo.find_by_id(&format!("id-{:03}", i)).await.unwrap();
            assert_eq!(found.original_url, format!("https://example{}.com", i));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_same_id() {
        let repo = Arc::new(InMemoryUrlRecordRepository::new());
        let urls: Vec<String> = (0..32).map(|i| format!("https://example{}.com", i)).collect();

        let handles: Vec<_> = urls
            .iter()
            .cloned()
            .map(|url| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save(record("7f17b0c9", &url)).await.unwrap() })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.len(), 1);
        let found = repo.find_by_id("7f17b0c9").await.unwrap();
        assert_eq!(found.id, "7f17b0c9");
        assert!(urls.contains(&found.original_url));
    }
}
