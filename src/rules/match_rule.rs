use regex::Regex;
use strum::Display;

/// The three rule collections that share the [`MatchRule`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RuleKind {
    Function,
    Context,
    Version,
}

impl RuleKind {
    /// Name of the ruleset collection holding rules of this kind.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Function => "functions",
            Self::Context => "contexts",
            Self::Version => "versions",
        }
    }
}

/// A named rule that claims benchmark names through a pair of regular expressions.
///
/// Functions, contexts and versions are all expressed with this type. Patterns are
/// compiled once, when the rule is built.
#[derive(Debug, Clone)]
pub struct MatchRule {
    id: String,
    title: String,
    positive: Option<Regex>,
    negative: Option<Regex>,
}

impl MatchRule {
    /// Build a rule, compiling its patterns. Empty patterns count as absent.
    ///
    /// # Errors
    ///
    /// Returns the regex error of the first pattern that does not compile.
    pub fn new(id: impl Into<String>, title: impl Into<String>, positive: Option<&str>, negative: Option<&str>) -> Result<Self, regex::Error> {
        Ok(Self {
            id: id.into(),
            title: title.into(),
            positive: compile(positive)?,
            negative: compile(negative)?,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn positive_pattern(&self) -> Option<&str> {
        self.positive.as_ref().map(Regex::as_str)
    }

    #[must_use]
    pub fn negative_pattern(&self) -> Option<&str> {
        self.negative.as_ref().map(Regex::as_str)
    }

    /// Whether `name` is claimed by this rule.
    ///
    /// A rule without any pattern never matches. A positive pattern must match and a
    /// negative pattern must not; a rule with only a negative pattern claims everything
    /// the negative pattern leaves out.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        match (&self.positive, &self.negative) {
            (None, None) => false,
            (Some(positive), None) => positive.is_match(name),
            (None, Some(negative)) => !negative.is_match(name),
            (Some(positive), Some(negative)) => positive.is_match(name) && !negative.is_match(name),
        }
    }

    /// The rule id when `name` is claimed by this rule.
    #[must_use]
    pub fn match_name(&self, name: &str) -> Option<&str> {
        self.is_match(name).then_some(self.id.as_str())
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>, regex::Error> {
    match pattern {
        Some(pattern) if !pattern.is_empty() => Regex::new(pattern).map(Some),
        _ => Ok(None),
    }
}
