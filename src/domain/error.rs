use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn missing_api_key(msg: impl Into<String>) -> Self {
        Self::MissingApiKey(msg.into())
    }

    pub fn translation_failed(msg: impl Into<String>) -> Self {
        Self::TranslationFailed(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_missing_api_key(&self) -> bool {
        matches!(self, Self::MissingApiKey(_))
    }

    pub fn is_translation_failed(&self) -> bool {
        matches!(self, Self::TranslationFailed(_))
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}
