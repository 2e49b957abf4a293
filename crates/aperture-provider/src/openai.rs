use aperture_core::{GenerateParams, GeneratedImage, ImageProvider, ProviderError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, ProviderError>;

/// Default API base for the hosted endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default image model.
pub const DEFAULT_MODEL: &str = "dall-e-3";

// Generation regularly runs tens of seconds; the connect phase does not.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configures the images client.
#[derive(Debug, Clone, TypedBuilder)]
pub struct OpenAiSettings {
    /// Bearer credential for the images endpoint.
    #[builder(setter(into))]
    pub api_key: String,
    /// Base URL of the API, without the endpoint path.
    #[builder(default = DEFAULT_API_BASE.to_string(), setter(into))]
    pub api_base: String,
    /// Model identifier sent with every request.
    #[builder(default = DEFAULT_MODEL.to_string(), setter(into))]
    pub model: String,
    /// Whole-request deadline.
    #[builder(default = REQUEST_TIMEOUT)]
    pub timeout: Duration,
    /// Deadline for establishing the connection.
    #[builder(default = CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
}

/// Client for an OpenAI-compatible image-generation endpoint.
///
/// Requests one image per call, addressed by URL. The provider keeps the
/// returned URL alive for roughly an hour, which is what the hosted
/// short-link TTL is calibrated against.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    http: reqwest::Client,
    settings: OpenAiSettings,
}

#[derive(Debug, Serialize)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    quality: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

fn map_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(err.to_string())
    } else {
        ProviderError::Transport(err.to_string())
    }
}

/// Pulls the human-readable message out of the provider's error envelope.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

impl OpenAiImageClient {
    /// Creates a client; fails only if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(settings: OpenAiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| ProviderError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/images/generations",
            self.settings.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageClient {
    async fn generate(&self, params: &GenerateParams) -> Result<GeneratedImage> {
        let request = ImagesRequest {
            model: &self.settings.model,
            prompt: &params.prompt,
            n: 1,
            size: params.size.as_str(),
            quality: "standard",
            response_format: "url",
        };

        debug!(model = %self.settings.model, size = %params.size, "Requesting image generation");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body).unwrap_or_else(|| body.trim().to_string());
            warn!(status = %status, "Image provider returned an error");
            return Err(ProviderError::Api(format!("{status}: {message}")));
        }

        let parsed: ImagesResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse images response: {e}"))
        })?;

        let url = parsed
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or_else(|| {
                ProviderError::InvalidResponse("images response carried no url".to_string())
            })?;

        Ok(GeneratedImage { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aperture_core::ImageSize;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAiImageClient {
        let settings = OpenAiSettings::builder()
            .api_key("test-key")
            .api_base(server.uri())
            .build();
        OpenAiImageClient::new(settings).unwrap()
    }

    fn params(prompt: &str) -> GenerateParams {
        GenerateParams {
            prompt: prompt.to_string(),
            size: ImageSize::Square1024,
        }
    }

    #[tokio::test]
    async fn generate_extracts_first_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "dall-e-3",
                "prompt": "a red fox",
                "n": 1,
                "size": "1024x1024",
                "quality": "standard",
                "response_format": "url",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "created": 1700000000,
                "data": [{"url": "https://img.example/out.png", "revised_prompt": "a vivid red fox"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let image = client.generate(&params("a red fox")).await.unwrap();
        assert_eq!(image.url, "https://img.example/out.png");
    }

    #[tokio::test]
    async fn generate_sends_requested_size() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .and(body_partial_json(
                serde_json::json!({"size": "1792x1024"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"url": "https://img.example/wide.png"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let image = client
            .generate(&GenerateParams {
                prompt: "a wide valley".to_string(),
                size: ImageSize::Landscape1792,
            })
            .await
            .unwrap();
        assert_eq!(image.url, "https://img.example/wide.png");
    }

    #[tokio::test]
    async fn generate_surfaces_api_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "message": "Billing hard limit has been reached",
                    "type": "invalid_request_error"
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate(&params("a red fox")).await.unwrap_err();
        match err {
            ProviderError::Api(message) => {
                assert!(message.contains("Billing hard limit has been reached"))
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_rejects_success_without_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"revised_prompt": "a vivid red fox"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate(&params("a red fox")).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn generate_rejects_empty_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": []})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.generate(&params("a red fox")).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
