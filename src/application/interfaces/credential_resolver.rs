use crate::domain::DomainError;

/// Locates the provider API key among the deployment's configuration sources.
///
/// Resolution is synchronous and happens at call time, so a rotated key is
/// picked up without restarting the process.
pub trait CredentialResolver: Send + Sync {
    /// Return the first non-empty key, or [`DomainError::MissingApiKey`] when
    /// no source yields one.
    fn resolve(&self) -> Result<String, DomainError>;
}
