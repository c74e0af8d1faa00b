pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    CompletionClient, CredentialResolver, FixGrammarUseCase, GenerateSeminarUseCase,
    TranslateTextUseCase,
};

pub use connector::{EnvCredentialResolver, GeminiClient, MockCompletion, API_KEY_VARIABLES};

pub use domain::{
    CompletionRequest, CompletionResult, DomainError, InlineImage, LanguagePair, Payload,
    SeminarBrief,
};
