use crate::KeyGenerator;
use aperture_core::LinkId;
use rand::RngCore;

/// Identifiers must stay unguessable, so the byte count never drops below
/// this floor: 2^40 values, comfortably past the 2^32 minimum.
pub const MIN_ID_BYTES: usize = 5;

const DEFAULT_ID_BYTES: usize = 8;

/// Generates identifiers from CSPRNG bytes, base58-encoded.
///
/// Uniqueness is probabilistic. At the default 8 bytes the chance of a
/// collision among the links live within one TTL window is negligible,
/// so there is no existence check against the store; a collision would
/// overwrite a short-lived alias, nothing more.
pub struct RandomKeyGenerator {
    id_bytes: usize,
}

impl RandomKeyGenerator {
    /// Creates a generator producing ids from the default 8 random bytes.
    pub fn new() -> Self {
        Self {
            id_bytes: DEFAULT_ID_BYTES,
        }
    }

    /// Creates a generator with a custom byte count, clamped to [`MIN_ID_BYTES`].
    pub fn with_id_bytes(id_bytes: usize) -> Self {
        Self {
            id_bytes: id_bytes.max(MIN_ID_BYTES),
        }
    }
}

impl Default for RandomKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> LinkId {
        let mut bytes = vec![0u8; self.id_bytes];
        rand::thread_rng().fill_bytes(&mut bytes);
        LinkId::new_unchecked(bs58::encode(bytes).into_string())
    }
}
