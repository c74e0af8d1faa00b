use std::sync::Arc;

use tracing::warn;

use crate::application::use_cases::persona;
use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError, Payload, SeminarBrief};

/// Long-form writing benefits from variety between runs.
const TEMPERATURE: f32 = 0.7;

/// Shown in place of a seminar when the provider answers with no text at all.
/// Badini for "Sorry, something went wrong."
const EMPTY_RESPONSE_FALLBACK: &str = "Borîne، şaşiyek çêbû.";

/// Generates a complete academic seminar in Kurdish Badini.
///
/// Failure policy: every error, credential or provider, propagates unchanged
/// so callers can inspect provider-specific detail.
pub struct GenerateSeminarUseCase {
    client: Arc<dyn CompletionClient>,
}

impl GenerateSeminarUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, brief: &SeminarBrief) -> Result<String, DomainError> {
        let request = build_request(brief);

        let result = self.client.complete(&request).await?;
        if result.is_empty() {
            warn!(
                "Seminar generation returned no text for topic {:?}",
                brief.topic()
            );
            return Ok(EMPTY_RESPONSE_FALLBACK.to_string());
        }

        Ok(result.into_text())
    }
}

fn build_request(brief: &SeminarBrief) -> CompletionRequest {
    let prompt = format!(
        "Write a complete academic seminar/presentation in Kurdish Badini dialect about: \
         \"{topic}\".\n\n\
         Structure requirements:\n\
         1. Sernivîs (title): a creative title.\n\
         2. Pêşgotin (introduction): introduce the topic clearly.\n\
         3. Naverok (content): detailed explanation of approximately {words} words \
         (enough for {pages} pages), broken into points and paragraphs.\n\
         4. Encam (conclusion): summary of the main points.\n\n\
         Tone: formal, academic, Badini Kurdish (Duhok/Zakho style).\n\
         Output only the seminar text. Do not include any English text.",
        topic = brief.topic(),
        words = brief.word_target(),
        pages = brief.page_count()
    );

    CompletionRequest::new(Payload::TextOnly(prompt))
        .with_system_instruction(persona::TRANSLATOR_PERSONA)
        .with_temperature(TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_topic_and_word_target() {
        let request = build_request(&SeminarBrief::new("Çanda Kurdî", "3"));

        let prompt = request.payload().text();
        assert!(prompt.contains("Çanda Kurdî"));
        assert!(prompt.contains("900 words"));
        assert!(prompt.contains("3 pages"));
    }

    #[test]
    fn prompt_lists_the_four_sections() {
        let request = build_request(&SeminarBrief::new("X", "1"));

        let prompt = request.payload().text();
        for label in ["Sernivîs", "Pêşgotin", "Naverok", "Encam"] {
            assert!(prompt.contains(label), "missing section label {label}");
        }
    }

    #[test]
    fn seminar_runs_with_high_temperature() {
        let request = build_request(&SeminarBrief::new("X", "1"));
        assert!(request.temperature() >= 0.5);
    }
}
