/// A source/target pair of language display names, as presented to the user
/// (e.g. "English" → "Badini Kurdish").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    source: String,
    target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// True when the source name requests automatic detection.
    ///
    /// UI language lists label the option "Auto" or "Auto-Detect"; the bare
    /// lowercase `auto` comes from programmatic callers.
    pub fn is_auto_detect(&self) -> bool {
        self.source.contains("Auto") || self.source == "auto"
    }
}
