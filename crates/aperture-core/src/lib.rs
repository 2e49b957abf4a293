//! Core types and traits for the Aperture image gateway.
//!
//! This crate provides the shared vocabulary used by the HTTP gateway and
//! the link-publication services: link identifiers, stored records, and the
//! trait seams for stores, image providers, and URL shorteners.

pub mod error;
pub mod issuer;
pub mod link_id;
pub mod provider;
pub mod shortener;
pub mod store;

pub use error::{CoreError, IssueError, ProviderError, ShortenError, StoreError};
pub use issuer::LinkIssuer;
pub use link_id::LinkId;
pub use provider::{GenerateParams, GeneratedImage, ImageProvider, ImageSize};
pub use shortener::UrlShortener;
pub use store::{LinkStore, ShortLinkRecord, DEFAULT_LINK_TTL};
