use aperture_core::{LinkId, LinkStore, ShortLinkRecord, StoreError};
use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, StoreError>;

const DEFAULT_KEY_PREFIX: &str = "ap:img:";

/// A Redis-backed implementation of [`LinkStore`].
///
/// Records are stored as JSON strings under a configurable key prefix.
/// Expiry rides on the Redis key itself (`SET ... EX`), so elapsed links
/// disappear without any sweeping on our side.
#[derive(Debug, Clone)]
pub struct RedisLinkStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else {
        StoreError::Operation(message)
    }
}

/// Generates the storage key for a link id.
fn storage_key(prefix: &str, id: &LinkId) -> String {
    format!("{}{}", prefix, id.as_str())
}

/// Opens a multiplexed connection to the given Redis URL.
pub async fn connect(url: &str) -> Result<redis::aio::MultiplexedConnection> {
    let client = redis::Client::open(url)
        .map_err(|e| StoreError::Initialization(format!("invalid redis url: {e}")))?;
    client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| StoreError::Initialization(format!("failed to connect to redis: {e}")))
}

impl RedisLinkStore {
    /// Creates a new Redis link store.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Creates a new Redis link store with a custom key prefix.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    /// * `key_prefix` - Custom prefix for storage keys (e.g., "myapp:img:")
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    fn key(&self, id: &LinkId) -> String {
        storage_key(&self.key_prefix, id)
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn put(&self, id: &LinkId, record: &ShortLinkRecord, ttl: Duration) -> Result<()> {
        let key = self.key(id);
        trace!(id = %id, "Storing link record in Redis");

        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to serialize link record");
                return Err(StoreError::Serialization(format!(
                    "failed to serialize link record: {e}"
                )));
            }
        };

        let mut conn = self.conn.clone();
        match conn.set_ex::<_, _, ()>(&key, json, ttl.as_secs()).await {
            Ok(()) => {
                debug!(id = %id, ttl_secs = ttl.as_secs(), "Stored link record in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to store link record in Redis");
                Err(map_redis_error("failed to write link record to Redis", e))
            }
        }
    }

    async fn get(&self, id: &LinkId) -> Result<Option<ShortLinkRecord>> {
        let key = self.key(id);
        trace!(id = %id, "Fetching link record from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(stored)) => {
                debug!(id = %id, "Link record found in Redis");
                match serde_json::from_str::<ShortLinkRecord>(&stored) {
                    Ok(record) => Ok(Some(record)),
                    Err(e) => {
                        warn!(id = %id, error = %e, "Failed to deserialize stored link record");
                        Err(StoreError::InvalidData(format!(
                            "invalid stored value for key '{key}': {e}"
                        )))
                    }
                }
            }
            Ok(None) => {
                trace!(id = %id, "Link record missing or expired in Redis");
                Ok(None)
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch link record from Redis", e))
            }
        }
    }
}
