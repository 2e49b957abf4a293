use aperture_core::{LinkId, LinkStore, ShortLinkRecord, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use std::time::Duration;

type Result<T> = std::result::Result<T, StoreError>;

/// In-memory entry carrying a record plus the key's own expiry.
#[derive(Debug, Clone)]
struct Entry {
    record: ShortLinkRecord,
    expires_at: Timestamp,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Timestamp::now() >= self.expires_at
    }
}

/// In-memory implementation of [`LinkStore`] using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Mappings do not survive a restart; use the
/// Redis backend for anything beyond development and tests.
#[derive(Debug, Clone)]
pub struct InMemoryLinkStore {
    storage: DashMap<String, Entry>,
}

impl InMemoryLinkStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }
}

impl Default for InMemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn put(&self, id: &LinkId, record: &ShortLinkRecord, ttl: Duration) -> Result<()> {
        let ttl = jiff::SignedDuration::try_from(ttl)
            .map_err(|e| StoreError::Operation(format!("invalid ttl: {e}")))?;
        let entry = Entry {
            record: record.clone(),
            expires_at: Timestamp::now() + ttl,
        };

        // Last write wins; ids are generated fresh per request.
        self.storage.insert(id.as_str().to_owned(), entry);
        Ok(())
    }

    async fn get(&self, id: &LinkId) -> Result<Option<ShortLinkRecord>> {
        let key = id.as_str();

        let Some(entry) = self.storage.get(key) else {
            return Ok(None);
        };

        if entry.is_expired() {
            drop(entry);
            self.storage.remove(key);
            return Ok(None);
        }

        Ok(Some(entry.record.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    const TTL: Duration = Duration::from_secs(3600);

    fn id(s: &str) -> LinkId {
        LinkId::new_unchecked(s)
    }

    fn record(url: &str) -> ShortLinkRecord {
        ShortLinkRecord {
            target_url: url.to_string(),
            expires_at: Timestamp::now() + SignedDuration::from_hours(1),
        }
    }

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryLinkStore::new();

        store
            .put(&id("abc123"), &record("https://img.example/a.png"), TTL)
            .await
            .unwrap();

        let result = store.get(&id("abc123")).await.unwrap().unwrap();
        assert_eq!(result.target_url, "https://img.example/a.png");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryLinkStore::new();

        let result = store.get(&id("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn elapsed_ttl_returns_none() {
        let store = InMemoryLinkStore::new();

        store
            .put(
                &id("abc123"),
                &record("https://img.example/a.png"),
                Duration::ZERO,
            )
            .await
            .unwrap();

        let result = store.get(&id("abc123")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn put_overwrites_existing() {
        let store = InMemoryLinkStore::new();

        store
            .put(&id("abc123"), &record("https://img.example/old.png"), TTL)
            .await
            .unwrap();
        store
            .put(&id("abc123"), &record("https://img.example/new.png"), TTL)
            .await
            .unwrap();

        let result = store.get(&id("abc123")).await.unwrap().unwrap();
        assert_eq!(result.target_url, "https://img.example/new.png");
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryLinkStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            let handle = tokio::spawn(async move {
                let link = LinkId::new_unchecked(format!("id{:03}", i));
                let r = ShortLinkRecord {
                    target_url: format!("https://img.example/{}.png", i),
                    expires_at: Timestamp::now() + SignedDuration::from_hours(1),
                };
                store.put(&link, &r, TTL).await.unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            let handle = tokio::spawn(async move {
                let link = LinkId::new_unchecked(format!("id{:03}", i));
                let _ = store.get(&link).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let link = LinkId::new_unchecked(format!("id{:03}", i));
            let result = store.get(&link).await.unwrap().unwrap();
            assert_eq!(result.target_url, format!("https://img.example/{}.png", i));
        }
    }
}
