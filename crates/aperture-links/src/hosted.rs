use aperture_core::{
    IssueError, LinkIssuer, LinkStore, ShortLinkRecord, StoreError, DEFAULT_LINK_TTL,
};
use aperture_keygen::KeyGenerator;
use async_trait::async_trait;
use jiff::Timestamp;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, IssueError>;

/// Publishes links behind the gateway's own redirect endpoint.
///
/// Each issuance generates a fresh identifier, writes the target URL to
/// the store with the link TTL, and hands out
/// `{public_base_url}/image/{id}`. A failed store write surfaces as an
/// error rather than falling back to the long URL.
///
/// The store handle is shared with the redirect side of the gateway, so
/// it comes in as an `Arc`.
#[derive(Debug, Clone)]
pub struct HostedLinks<S, G> {
    store: Arc<S>,
    keygen: Arc<G>,
    public_base_url: String,
    ttl: Duration,
}

impl<S: LinkStore, G: KeyGenerator> HostedLinks<S, G> {
    /// Creates an issuer with the default one-hour TTL.
    pub fn new(store: Arc<S>, keygen: G, public_base_url: impl Into<String>) -> Self {
        Self::with_ttl(store, keygen, public_base_url, DEFAULT_LINK_TTL)
    }

    /// Creates an issuer with a custom TTL.
    pub fn with_ttl(
        store: Arc<S>,
        keygen: G,
        public_base_url: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            keygen: Arc::new(keygen),
            public_base_url: public_base_url.into(),
            ttl,
        }
    }
}

#[async_trait]
impl<S: LinkStore, G: KeyGenerator> LinkIssuer for HostedLinks<S, G> {
    async fn issue(&self, target_url: String) -> Result<String> {
        let id = self.keygen.generate();

        let ttl = jiff::SignedDuration::try_from(self.ttl)
            .map_err(|e| StoreError::Operation(format!("invalid ttl: {e}")))?;
        let record = ShortLinkRecord {
            target_url,
            expires_at: Timestamp::now() + ttl,
        };

        match self.store.put(&id, &record, self.ttl).await {
            Ok(()) => {
                debug!(id = %id, "Issued hosted link");
                Ok(id.to_url(&self.public_base_url))
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to store link record");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aperture_core::LinkId;
    use aperture_keygen::RandomKeyGenerator;
    use aperture_store::InMemoryLinkStore;

    struct FixedKeys(&'static str);

    impl KeyGenerator for FixedKeys {
        fn generate(&self) -> LinkId {
            LinkId::new_unchecked(self.0)
        }
    }

    struct FailingStore;

    #[async_trait]
    impl LinkStore for FailingStore {
        async fn put(
            &self,
            _id: &LinkId,
            _record: &ShortLinkRecord,
            _ttl: Duration,
        ) -> std::result::Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn get(
            &self,
            _id: &LinkId,
        ) -> std::result::Result<Option<ShortLinkRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn issue_writes_record_and_returns_lookup_url() {
        let store = Arc::new(InMemoryLinkStore::new());
        let links = HostedLinks::new(
            Arc::clone(&store),
            FixedKeys("3yQ29gkz"),
            "http://localhost:8080",
        );

        let url = links
            .issue("https://img.example/long.png".to_string())
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:8080/image/3yQ29gkz");

        let record = store
            .get(&LinkId::new_unchecked("3yQ29gkz"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.target_url, "https://img.example/long.png");
        assert!(record.expires_at > Timestamp::now());
    }

    #[tokio::test]
    async fn issue_trims_trailing_slash_on_base_url() {
        let store = Arc::new(InMemoryLinkStore::new());
        let links = HostedLinks::new(store, FixedKeys("abc123"), "http://localhost:8080/");

        let url = links
            .issue("https://img.example/long.png".to_string())
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:8080/image/abc123");
    }

    #[tokio::test]
    async fn repeated_issuance_yields_distinct_urls() {
        let store = Arc::new(InMemoryLinkStore::new());
        let links = HostedLinks::new(store, RandomKeyGenerator::new(), "http://localhost:8080");

        let first = links
            .issue("https://img.example/same.png".to_string())
            .await
            .unwrap();
        let second = links
            .issue("https://img.example/same.png".to_string())
            .await
            .unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn zero_ttl_link_is_immediately_unresolvable() {
        let store = Arc::new(InMemoryLinkStore::new());
        let links = HostedLinks::with_ttl(
            Arc::clone(&store),
            FixedKeys("abc123"),
            "http://localhost:8080",
            Duration::ZERO,
        );

        links
            .issue("https://img.example/long.png".to_string())
            .await
            .unwrap();

        let record = store.get(&LinkId::new_unchecked("abc123")).await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn failed_store_write_surfaces() {
        let links = HostedLinks::new(
            Arc::new(FailingStore),
            FixedKeys("abc123"),
            "http://localhost:8080",
        );

        let err = links
            .issue("https://img.example/long.png".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, IssueError::Storage(_)));
    }
}
