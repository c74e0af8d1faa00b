use std::sync::Arc;

use tracing::debug;

use crate::application::use_cases::persona;
use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError, Payload};

/// Corrections should be near-deterministic.
const TEMPERATURE: f32 = 0.1;

/// Best-effort grammar and spelling correction.
///
/// Failure policy: a missing API key propagates (there is nothing sensible to
/// correct with); once credentials resolve, any provider failure recovers to
/// the original input, as does an empty reply.  Callers never see a
/// post-credential error from this use case.
pub struct FixGrammarUseCase {
    client: Arc<dyn CompletionClient>,
}

impl FixGrammarUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Correct the grammar and spelling of `text`, written in `language_name`.
    pub async fn execute(&self, text: &str, language_name: &str) -> Result<String, DomainError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let request = build_request(text, language_name);

        match self.client.complete(&request).await {
            Ok(result) if result.is_empty() => Ok(text.to_string()),
            Ok(result) => Ok(result.into_text()),
            Err(e) if e.is_missing_api_key() => Err(e),
            Err(e) => {
                debug!("Grammar correction failed, returning input unchanged: {e}");
                Ok(text.to_string())
            }
        }
    }
}

fn build_request(text: &str, language_name: &str) -> CompletionRequest {
    let prompt = format!(
        "Fix the grammar and spelling of the following text in {language_name}. \
         Return ONLY the corrected text, no explanations.\n\nText: \"{text}\""
    );

    CompletionRequest::new(Payload::TextOnly(prompt))
        .with_system_instruction(persona::GRAMMAR_PERSONA)
        .with_temperature(TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_language_and_quotes_the_text() {
        let request = build_request("i has a apple", "English");

        let prompt = request.payload().text();
        assert!(prompt.contains("in English"));
        assert!(prompt.contains("\"i has a apple\""));
    }

    #[test]
    fn correction_runs_nearly_deterministic() {
        let request = build_request("text", "English");
        assert!(request.temperature() <= 0.1);
    }
}
