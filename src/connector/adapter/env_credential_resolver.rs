use tracing::warn;

use crate::application::CredentialResolver;
use crate::domain::DomainError;

/// Environment variables checked for the API key, highest priority first.
///
/// The `VITE_`-prefixed name leads because web bundlers only expose prefixed
/// variables to the client bundle; the remaining names cover server-side and
/// legacy configurations.
pub const API_KEY_VARIABLES: &[&str] = &[
    "VITE_GEMINI_API_KEY",
    "REACT_APP_GEMINI_API_KEY",
    "GEMINI_API_KEY",
    "API_KEY",
];

/// A [`CredentialResolver`] that walks an ordered list of environment
/// variables and returns the first non-empty value, trimmed.
///
/// The environment is read on every call, so rotating the key does not
/// require restarting the process.
pub struct EnvCredentialResolver {
    variables: Vec<&'static str>,
}

impl EnvCredentialResolver {
    pub fn new() -> Self {
        Self {
            variables: API_KEY_VARIABLES.to_vec(),
        }
    }

    /// Override the lookup order.  Embedders with their own naming
    /// conventions (and tests) use this instead of the default list.
    pub fn with_variables(variables: Vec<&'static str>) -> Self {
        Self { variables }
    }

    fn preferred_variable(&self) -> &'static str {
        self.variables.first().copied().unwrap_or("GEMINI_API_KEY")
    }
}

impl Default for EnvCredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver for EnvCredentialResolver {
    fn resolve(&self) -> Result<String, DomainError> {
        for name in &self.variables {
            if let Ok(value) = std::env::var(name) {
                let value = value.trim();
                if !value.is_empty() {
                    return Ok(value.to_string());
                }
            }
        }

        warn!(
            "No API key found in any of {:?}; set {} in the deployment environment",
            self.variables,
            self.preferred_variable()
        );
        Err(DomainError::missing_api_key(format!(
            "no API key configured; set {}",
            self.preferred_variable()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names so tests stay independent of the
    // real environment and of each other.

    #[test]
    fn first_variable_wins() {
        std::env::set_var("BG_TEST_PRIMARY", "primary-key");
        std::env::set_var("BG_TEST_SECONDARY", "secondary-key");

        let resolver =
            EnvCredentialResolver::with_variables(vec!["BG_TEST_PRIMARY", "BG_TEST_SECONDARY"]);
        assert_eq!(resolver.resolve().unwrap(), "primary-key");

        std::env::remove_var("BG_TEST_PRIMARY");
        std::env::remove_var("BG_TEST_SECONDARY");
    }

    #[test]
    fn falls_back_past_unset_variables() {
        std::env::remove_var("BG_TEST_UNSET");
        std::env::set_var("BG_TEST_FALLBACK", "fallback-key");

        let resolver =
            EnvCredentialResolver::with_variables(vec!["BG_TEST_UNSET", "BG_TEST_FALLBACK"]);
        assert_eq!(resolver.resolve().unwrap(), "fallback-key");

        std::env::remove_var("BG_TEST_FALLBACK");
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        std::env::set_var("BG_TEST_BLANK", "   ");

        let resolver = EnvCredentialResolver::with_variables(vec!["BG_TEST_BLANK"]);
        let err = resolver.resolve().unwrap_err();
        assert!(err.is_missing_api_key());

        std::env::remove_var("BG_TEST_BLANK");
    }

    #[test]
    fn values_are_trimmed() {
        std::env::set_var("BG_TEST_PADDED", "  padded-key \n");

        let resolver = EnvCredentialResolver::with_variables(vec!["BG_TEST_PADDED"]);
        assert_eq!(resolver.resolve().unwrap(), "padded-key");

        std::env::remove_var("BG_TEST_PADDED");
    }

    #[test]
    fn error_names_the_preferred_variable() {
        let resolver = EnvCredentialResolver::with_variables(vec!["BG_TEST_NEVER_SET"]);
        let err = resolver.resolve().unwrap_err();
        assert!(err.to_string().contains("BG_TEST_NEVER_SET"));
    }
}
