use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, CompletionResult, DomainError};

enum Script {
    Reply(String),
    ProviderFailure(String),
    MissingKey,
}

/// A deterministic [`CompletionClient`] for tests and offline wiring: answers
/// every call from a fixed script and records each request it receives so
/// assertions can inspect prompt shape, payload, and call counts.
pub struct MockCompletion {
    script: Script,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    /// Reply to every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with a provider error carrying `detail`.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            script: Script::ProviderFailure(detail.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call as if no credential source yielded a key.
    pub fn missing_key() -> Self {
        Self {
            script: Script::MissingKey,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.lock_requests().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.lock_requests().last().cloned()
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, DomainError> {
        self.lock_requests().push(request.clone());

        match &self.script {
            Script::Reply(text) => Ok(CompletionResult::new(text.clone())),
            Script::ProviderFailure(detail) => Err(DomainError::provider(detail.clone())),
            Script::MissingKey => Err(DomainError::missing_api_key(
                "no API key configured; set VITE_GEMINI_API_KEY",
            )),
        }
    }
}
