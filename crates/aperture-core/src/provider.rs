use crate::error::ProviderError;
use async_trait::async_trait;
use std::fmt::Display;

type Result<T> = std::result::Result<T, ProviderError>;

/// Image dimensions accepted by the generation endpoint.
///
/// Clients may ask for anything; values outside the allow-list coerce to
/// the square default instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Square1024,
    Landscape1792,
    Portrait1792,
}

impl ImageSize {
    /// Maps a client-supplied string onto the allow-list.
    ///
    /// Unrecognized values and `None` both become `1024x1024`.
    pub fn coerce(value: Option<&str>) -> Self {
        match value {
            Some("1024x1024") | None => Self::Square1024,
            Some("1792x1024") => Self::Landscape1792,
            Some("1024x1792") => Self::Portrait1792,
            Some(_) => Self::Square1024,
        }
    }

    /// Returns the wire form understood by the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square1024 => "1024x1024",
            Self::Landscape1792 => "1792x1024",
            Self::Portrait1792 => "1024x1792",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one image-generation call.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// The text prompt describing the image.
    pub prompt: String,
    /// Requested output dimensions.
    pub size: ImageSize,
}

/// A generated image, referenced by a time-limited URL.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// Where the image can be fetched; valid for roughly an hour upstream.
    pub url: String,
}

/// A client for an external image-generation service.
#[async_trait]
pub trait ImageProvider: Send + Sync + 'static {
    /// Generates a single image and returns its URL.
    async fn generate(&self, params: &GenerateParams) -> Result<GeneratedImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_allow_listed_sizes() {
        assert_eq!(ImageSize::coerce(Some("1024x1024")), ImageSize::Square1024);
        assert_eq!(
            ImageSize::coerce(Some("1792x1024")),
            ImageSize::Landscape1792
        );
        assert_eq!(
            ImageSize::coerce(Some("1024x1792")),
            ImageSize::Portrait1792
        );
    }

    #[test]
    fn coerce_unknown_to_default() {
        assert_eq!(ImageSize::coerce(Some("999x999")), ImageSize::Square1024);
        assert_eq!(ImageSize::coerce(Some("1024X1024")), ImageSize::Square1024);
        assert_eq!(ImageSize::coerce(Some("")), ImageSize::Square1024);
        assert_eq!(ImageSize::coerce(None), ImageSize::Square1024);
    }

    #[test]
    fn wire_form_round_trips_through_coerce() {
        for size in [
            ImageSize::Square1024,
            ImageSize::Landscape1792,
            ImageSize::Portrait1792,
        ] {
            assert_eq!(ImageSize::coerce(Some(size.as_str())), size);
        }
    }
}
