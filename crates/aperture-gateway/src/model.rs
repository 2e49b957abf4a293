pub mod image;

pub use image::{ErrorResponse, GenerateImageRequest, GenerateImageResponse, HealthResponse};
