//! The declarative ruleset and its validated form.
//!
//! A ruleset names the functions, versions and contexts found in benchmark names,
//! the metrics to chart and the categories (charts) built from them. Users write a
//! [`RulesetDocument`] in YAML, TOML or JSON; it is overlaid on the embedded defaults
//! and validated into an immutable [`RuleStore`], which then classifies benchmark
//! names and input file names.
//!
//! # Loading
//!
//! ```text
//! default_config.yml ──┐
//!                      ├─ deep merge ─> RulesetDocument ─ validate ─> RuleStore
//! user ruleset ────────┘
//! ```
//!
//! Validation rejects empty or duplicate ids, references to undefined ids, unknown
//! metric names, categories without metrics and regular expressions that do not
//! compile. Omitted function, version and context lists of a category are expanded
//! to every defined id.
//!
//! # Matching
//!
//! A [`MatchRule`] claims a name when its positive pattern matches and its negative
//! pattern does not. Within a collection, the first rule in declaration order wins.
//! [`FileRule`]s apply the same logic to input file names.

mod category;
mod classifier;
mod document;
mod file_rule;
mod match_rule;
mod metric;
mod metric_name;
mod render;
mod rule_store;
mod synthesize;
mod titleize;

pub use category::{Category, Includes};
pub use classifier::first_match;
pub use document::{
    CategoryEntry, DEFAULT_CONFIG_YAML, DocumentFormat, FileEntry, IncludesEntry, MetricEntry, RuleEntry, RulesetDocument, merge_values,
};
pub use file_rule::FileRule;
pub use match_rule::{MatchRule, RuleKind};
pub use metric::Metric;
pub use metric_name::MetricName;
pub use render::{LegendPosition, Layout, Orientation, RenderSettings, Scale, Screenshot};
pub use rule_store::RuleStore;
pub use synthesize::{bench_name_to_id, synthesize};
pub use titleize::titleize;
