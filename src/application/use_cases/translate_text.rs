use std::sync::Arc;

use tracing::warn;

use crate::application::use_cases::persona;
use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError, InlineImage, LanguagePair, Payload};

/// Moderately low temperature: translations should be stable, with a little
/// room for natural phrasing.
const TEMPERATURE: f32 = 0.3;

/// Message surfaced to callers when a translation attempt fails.  The
/// underlying cause is logged, never shown.
const FAILURE_MESSAGE: &str = "Translation failed. Please try again.";

/// Translates text (and/or an image) between named languages.
///
/// Failure policy: a missing API key propagates as-is so the caller can show
/// a configuration hint; every other failure is logged and wrapped in a
/// generic [`DomainError::TranslationFailed`].
pub struct TranslateTextUseCase {
    client: Arc<dyn CompletionClient>,
}

impl TranslateTextUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Translate `text` according to `languages`, optionally attaching an
    /// inline image.  `image_base64` accepts raw base64 or a full data URI;
    /// with an image attached, the model translates or describes what is
    /// visible in it instead of `text`.
    ///
    /// Empty input with no image short-circuits to `""` without touching
    /// credentials or the network.
    pub async fn execute(
        &self,
        text: &str,
        languages: &LanguagePair,
        image_base64: Option<&str>,
    ) -> Result<String, DomainError> {
        // An empty image string counts as no image.
        let image_base64 = image_base64.filter(|raw| !raw.trim().is_empty());

        if text.trim().is_empty() && image_base64.is_none() {
            return Ok(String::new());
        }

        let request = build_request(text, languages, image_base64);

        match self.client.complete(&request).await {
            Ok(result) => Ok(result.into_text()),
            Err(e) if e.is_missing_api_key() => Err(e),
            Err(e) => {
                warn!("Translation request failed: {e}");
                Err(DomainError::translation_failed(FAILURE_MESSAGE))
            }
        }
    }
}

/// Build the completion request for one translation call.
fn build_request(
    text: &str,
    languages: &LanguagePair,
    image_base64: Option<&str>,
) -> CompletionRequest {
    let payload = match image_base64 {
        Some(raw) => {
            let instruction = format!(
                "Analyze this image and translate any text found inside it to {target}. \
                 If there is no text, describe the image in {target}. \
                 Return ONLY the translation or description.",
                target = languages.target()
            );
            Payload::TextWithImage {
                text: instruction,
                image: InlineImage::from_base64(raw),
            }
        }
        None if languages.is_auto_detect() => Payload::TextOnly(format!(
            "Translate the following text to {}. Detect the source language automatically.\n\
             Text to translate:\n\"{}\"",
            languages.target(),
            text
        )),
        None => Payload::TextOnly(format!(
            "Translate the following text from {} to {}.\n\
             Text to translate:\n\"{}\"",
            languages.source(),
            languages.target(),
            text
        )),
    };

    CompletionRequest::new(payload)
        .with_system_instruction(persona::TRANSLATOR_PERSONA)
        .with_temperature(TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_source_names_both_languages() {
        let request = build_request("hello", &LanguagePair::new("English", "French"), None);

        let prompt = request.payload().text();
        assert!(prompt.contains("from English to French"));
        assert!(prompt.contains("\"hello\""));
        assert!(!request.payload().has_image());
    }

    #[test]
    fn auto_source_switches_to_detection_template() {
        let request = build_request("hello", &LanguagePair::new("Auto", "French"), None);

        let prompt = request.payload().text();
        assert!(prompt.contains("Detect the source language"));
        assert!(!prompt.contains("from Auto"));
    }

    #[test]
    fn image_input_builds_multimodal_payload() {
        let request = build_request(
            "",
            &LanguagePair::new("Auto", "Badini Kurdish"),
            Some("data:image/jpeg;base64,AAAA"),
        );

        let image = request.payload().image().expect("image part missing");
        assert_eq!(image.data(), "AAAA");
        assert!(request.payload().text().contains("Badini Kurdish"));
    }

    #[test]
    fn translation_uses_low_temperature() {
        let request = build_request("hi", &LanguagePair::new("English", "French"), None);
        assert!(request.temperature() <= 0.5);
        assert!(!request.system_instruction().is_empty());
    }
}
