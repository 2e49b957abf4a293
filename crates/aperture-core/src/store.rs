use crate::error::StoreError;
use crate::link_id::LinkId;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

type Result<T> = std::result::Result<T, StoreError>;

/// How long a hosted link stays resolvable.
///
/// Matches the validity window of the provider's image URLs; keeping a
/// mapping alive longer would redirect to a dead upstream URL.
pub const DEFAULT_LINK_TTL: Duration = Duration::from_secs(60 * 60);

/// A stored short-link record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLinkRecord {
    /// The upstream image URL being aliased.
    pub target_url: String,
    /// When the record becomes unresolvable.
    pub expires_at: Timestamp,
}

/// A key-value store of short-link records with per-entry expiry.
///
/// `Ok(None)` from `get` covers both "never stored" and "expired";
/// implementations enforce expiry themselves, either through native key
/// TTLs or by checking `expires_at` on read.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Stores a record under `id`, expiring after `ttl`.
    ///
    /// Writing to an existing id overwrites it.
    async fn put(&self, id: &LinkId, record: &ShortLinkRecord, ttl: Duration) -> Result<()>;

    /// Retrieves the record for `id` if present and unexpired.
    async fn get(&self, id: &LinkId) -> Result<Option<ShortLinkRecord>>;
}
