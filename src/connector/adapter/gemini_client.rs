use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{CompletionClient, CredentialResolver};
use crate::connector::EnvCredentialResolver;
use crate::domain::{CompletionRequest, CompletionResult, DomainError, Payload};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const GENERATE_CONTENT_METHOD: &str = "generateContent";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `generateContent` request payload.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<ApiContent<'a>>,
    system_instruction: ApiContent<'a>,
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct ApiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<ApiPart<'a>>,
}

#[derive(serde::Serialize)]
#[serde(untagged)]
enum ApiPart<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: ApiInlineData<'a>,
    },
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiInlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Minimal subset of the `generateContent` response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Implements [`CompletionClient`] so the use cases stay decoupled from
/// transport and serialization details.  The underlying `reqwest::Client` is
/// built once and shared across calls; the API key, by contrast, is resolved
/// through the injected [`CredentialResolver`] on every call, and a missing
/// key propagates to the caller unchanged.
///
/// **Base URL**: defaults to `https://generativelanguage.googleapis.com`.
/// Override with `GEMINI_BASE_URL` to target any Gemini-compatible server.
pub struct GeminiClient {
    client: reqwest::Client,
    credentials: Arc<dyn CredentialResolver>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with an explicit resolver, default model, and endpoint.
    pub fn new(
        credentials: Arc<dyn CredentialResolver>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            credentials,
            model: model.into(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Convenience constructor that reads configuration from the environment:
    ///
    /// | Variable          | Default                                     |
    /// |-------------------|---------------------------------------------|
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash`                          |
    ///
    /// The API key itself is looked up per call by [`EnvCredentialResolver`].
    pub fn from_env() -> Self {
        let base = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(Arc::new(EnvCredentialResolver::new()), model, base)
    }

    fn endpoint(&self, request_model: &str) -> String {
        let model = if request_model.is_empty() {
            self.model.as_str()
        } else {
            request_model
        };
        format!(
            "{}/v1beta/models/{}:{}",
            self.base_url, model, GENERATE_CONTENT_METHOD
        )
    }

    /// Concatenate the text parts of the first candidate.  Absent candidates
    /// or parts yield an empty string, never an error.
    fn extract_text(response: ApiResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, DomainError> {
        let api_key = self.credentials.resolve()?;

        // The image part goes first so the text instruction reads as a caption
        // to it, matching the provider's multimodal examples.
        let parts = match request.payload() {
            Payload::TextOnly(text) => vec![ApiPart::Text { text }],
            Payload::TextWithImage { text, image } => vec![
                ApiPart::InlineData {
                    inline_data: ApiInlineData {
                        mime_type: image.mime_type(),
                        data: image.data(),
                    },
                },
                ApiPart::Text { text },
            ],
        };

        let body = ApiRequest {
            contents: vec![ApiContent {
                role: Some("user"),
                parts,
            }],
            system_instruction: ApiContent {
                role: None,
                parts: vec![ApiPart::Text {
                    text: request.system_instruction(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature(),
            },
        };

        let url = self.endpoint(request.model_id());
        debug!("Sending completion request to {url}");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::provider(format!("API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::provider(format!("failed to parse response: {e}")))?;

        Ok(CompletionResult::new(Self::extract_text(api_response)))
    }
}
