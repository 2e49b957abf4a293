//! Opaque identifier generation for hosted short links.

mod random;

pub use random::{RandomKeyGenerator, MIN_ID_BYTES};

use aperture_core::LinkId;

/// Trait for generating link identifiers.
///
/// Implementations are pure generators that don't interact with storage.
pub trait KeyGenerator: Send + Sync + 'static {
    /// Generates a fresh identifier.
    ///
    /// Callers rely on outputs being unguessable and collision-free in
    /// practice; see the implementation for its entropy floor.
    fn generate(&self) -> LinkId;
}
