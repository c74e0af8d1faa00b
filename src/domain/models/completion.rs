use serde::{Deserialize, Serialize};

/// MIME type assumed when an image arrives as bare base64 with no data-URI header.
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Base64-encoded image bytes embedded directly in a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    mime_type: String,
    data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Accepts either raw base64 or a full `data:<mime>;base64,<payload>` URI.
    ///
    /// The provider rejects payloads that still carry the data-URI header, so
    /// the prefix is stripped here once, at construction. A MIME type found in
    /// the header is kept; bare base64 defaults to `image/jpeg`.
    pub fn from_base64(raw: &str) -> Self {
        if let Some((header, data)) = raw.split_once(',') {
            if let Some(mime) = header.strip_prefix("data:") {
                let mime = mime.trim_end_matches(";base64");
                let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
                return Self::new(mime, data);
            }
        }
        Self::new(DEFAULT_IMAGE_MIME, raw)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Content of a completion request: plain text, or text accompanied by an
/// inline image for multimodal calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    TextOnly(String),
    TextWithImage { text: String, image: InlineImage },
}

impl Payload {
    pub fn text(&self) -> &str {
        match self {
            Self::TextOnly(text) => text,
            Self::TextWithImage { text, .. } => text,
        }
    }

    pub fn image(&self) -> Option<&InlineImage> {
        match self {
            Self::TextOnly(_) => None,
            Self::TextWithImage { image, .. } => Some(image),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }
}

/// One fully-built request to the completion provider. Immutable once built.
///
/// An empty `model_id` selects whatever default model the client was
/// configured with.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    model_id: String,
    payload: Payload,
    system_instruction: String,
    temperature: f32,
}

impl CompletionRequest {
    pub fn new(payload: Payload) -> Self {
        Self {
            model_id: String::new(),
            payload,
            system_instruction: String::new(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        // Sampling temperature is defined on [0, 1] for this gateway.
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn uses_default_model(&self) -> bool {
        self.model_id.is_empty()
    }
}

/// Text extracted from a provider response. Empty when the provider returned
/// no text part; operation-specific fallbacks are applied by the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    text: String,
}

impl CompletionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_base64_strips_data_uri_prefix() {
        let image = InlineImage::from_base64("data:image/jpeg;base64,AAAA");
        assert_eq!(image.data(), "AAAA");
        assert_eq!(image.mime_type(), "image/jpeg");
    }

    #[test]
    fn from_base64_keeps_mime_from_header() {
        let image = InlineImage::from_base64("data:image/png;base64,QUJD");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.data(), "QUJD");
    }

    #[test]
    fn from_base64_passes_raw_payload_through() {
        let image = InlineImage::from_base64("QUJDRA==");
        assert_eq!(image.data(), "QUJDRA==");
        assert_eq!(image.mime_type(), "image/jpeg");
    }

    #[test]
    fn from_base64_defaults_mime_on_empty_header() {
        let image = InlineImage::from_base64("data:;base64,AAAA");
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.data(), "AAAA");
    }

    #[test]
    fn request_builder_clamps_temperature() {
        let request = CompletionRequest::new(Payload::TextOnly("hi".to_string()))
            .with_temperature(1.7);
        assert_eq!(request.temperature(), 1.0);

        let request = CompletionRequest::new(Payload::TextOnly("hi".to_string()))
            .with_temperature(-0.2);
        assert_eq!(request.temperature(), 0.0);
    }

    #[test]
    fn request_defaults_to_client_model() {
        let request = CompletionRequest::new(Payload::TextOnly("hi".to_string()));
        assert!(request.uses_default_model());

        let request = request.with_model("gemini-2.5-flash");
        assert!(!request.uses_default_model());
    }

    #[test]
    fn payload_accessors() {
        let text_only = Payload::TextOnly("hello".to_string());
        assert_eq!(text_only.text(), "hello");
        assert!(!text_only.has_image());

        let with_image = Payload::TextWithImage {
            text: "describe".to_string(),
            image: InlineImage::new("image/png", "AAAA"),
        };
        assert_eq!(with_image.text(), "describe");
        assert_eq!(with_image.image().map(|i| i.data()), Some("AAAA"));
    }
}
