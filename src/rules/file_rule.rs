use crate::rules::MatchRule;
use regex::Regex;

/// Classifies records by the name of the file they were read from.
///
/// Used when the benchmark name alone does not identify a version or a context.
#[derive(Debug, Clone)]
pub struct FileRule {
    id: String,
    pattern: Option<Regex>,
    contexts: Vec<MatchRule>,
    versions: Vec<MatchRule>,
}

impl FileRule {
    /// Build a file rule. An empty pattern produces a rule that never matches.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the file pattern does not compile.
    pub fn new(id: impl Into<String>, pattern: &str, contexts: Vec<MatchRule>, versions: Vec<MatchRule>) -> Result<Self, regex::Error> {
        let pattern = if pattern.is_empty() { None } else { Some(Regex::new(pattern)?) };

        Ok(Self {
            id: id.into(),
            pattern,
            contexts,
            versions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    #[must_use]
    pub fn contexts(&self) -> &[MatchRule] {
        &self.contexts
    }

    #[must_use]
    pub fn versions(&self) -> &[MatchRule] {
        &self.versions
    }

    /// The rule id when `filename` matches the file pattern.
    #[must_use]
    pub fn match_file(&self, filename: &str) -> Option<&str> {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(filename))
            .then_some(self.id.as_str())
    }
}
