use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque identifier for a hosted short link.
///
/// Identifiers are 1-32 ASCII alphanumeric characters. Generated ids are
/// base58 text, so the charset check also rejects anything a generator
/// could not have produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(String);

const MAX_LENGTH: usize = 32;

impl LinkId {
    /// Parses an inbound identifier, validating length and charset.
    pub fn parse(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() || id.len() > MAX_LENGTH {
            return Err(CoreError::InvalidLinkId(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                id.len()
            )));
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidLinkId(format!(
                "must contain only ASCII alphanumeric characters: '{}'",
                id
            )));
        }

        Ok(Self(id))
    }

    /// Wraps an identifier produced by a trusted generator, skipping validation.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates the public lookup URL for this identifier under the given base.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/image/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
