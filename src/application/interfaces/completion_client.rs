use async_trait::async_trait;

use crate::domain::{CompletionRequest, CompletionResult, DomainError};

/// An interface for sending one completion request to a generative language
/// provider and receiving the response text.
///
/// Implementors encapsulate transport, serialization, credential resolution,
/// and vendor-specific API details.  Consumers (the use cases) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single request and return the extracted response text.
    ///
    /// Exactly one attempt is made; no retry is performed here.  A provider
    /// response carrying no text part yields an empty [`CompletionResult`]
    /// rather than an error; operation-specific fallbacks are applied by the
    /// caller.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResult, DomainError>;
}
