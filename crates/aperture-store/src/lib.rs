//! Short-link store backends.
//!
//! Two implementations of [`aperture_core::LinkStore`]: a Redis-backed
//! store for deployments and a DashMap-backed store for development and
//! tests.

pub mod memory;
pub mod redis;

pub use memory::InMemoryLinkStore;
pub use self::redis::{connect, RedisLinkStore};
