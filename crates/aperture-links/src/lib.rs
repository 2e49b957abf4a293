//! Link-publication services.
//!
//! Three implementations of [`aperture_core::LinkIssuer`], one per
//! publication mode: pass the provider URL through, shorten it through an
//! external service, or alias it behind the gateway's own redirect.

pub mod direct;
pub mod hosted;
pub mod shortened;

pub use direct::DirectLinks;
pub use hosted::HostedLinks;
pub use shortened::ShortenedLinks;
