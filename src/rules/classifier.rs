//! Name and file-name classification against a [`RuleStore`].
//!
//! Every lookup is a first-match scan in declaration order, so the order of rules in
//! the ruleset decides ties.

use crate::rules::{FileRule, MatchRule, RuleStore};

/// The id of the first rule claiming `name`.
#[must_use]
pub fn first_match<'a>(rules: &'a [MatchRule], name: &str) -> Option<&'a str> {
    rules.iter().find_map(|rule| rule.match_name(name))
}

impl RuleStore {
    /// The first function rule claiming a benchmark name.
    #[must_use]
    pub fn find_function(&self, name: &str) -> Option<&str> {
        first_match(self.functions(), name)
    }

    /// The first version rule claiming a benchmark name.
    #[must_use]
    pub fn find_version(&self, name: &str) -> Option<&str> {
        first_match(self.versions(), name)
    }

    /// The first context rule claiming a benchmark name.
    #[must_use]
    pub fn find_context(&self, name: &str) -> Option<&str> {
        first_match(self.contexts(), name)
    }

    /// Resolve a version from the name of the input file.
    ///
    /// Only the first file rule whose pattern matches is consulted.
    #[must_use]
    pub fn find_version_from_file(&self, filename: &str) -> Option<&str> {
        self.matching_file_rule(filename)
            .and_then(|rule| first_match(rule.versions(), filename))
    }

    /// Resolve a context from the name of the input file.
    ///
    /// Only the first file rule whose pattern matches is consulted.
    #[must_use]
    pub fn find_context_from_file(&self, filename: &str) -> Option<&str> {
        self.matching_file_rule(filename)
            .and_then(|rule| first_match(rule.contexts(), filename))
    }

    fn matching_file_rule(&self, filename: &str) -> Option<&FileRule> {
        self.files().iter().find(|rule| rule.match_file(filename).is_some())
    }
}
