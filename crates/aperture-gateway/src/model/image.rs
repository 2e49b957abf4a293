use serde::{Deserialize, Serialize};

// `prompt` stays an Option so a missing key reaches the handler's own
// validation instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
