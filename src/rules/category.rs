use crate::rules::MetricName;

/// A validated category: one chart and the ids it draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub includes: Includes,
}

/// Resolved category membership. Omitted functions, versions and contexts have already
/// been expanded to every defined id, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Includes {
    pub functions: Vec<String>,
    pub versions: Vec<String>,
    pub contexts: Vec<String>,
    pub metrics: Vec<MetricName>,
}
