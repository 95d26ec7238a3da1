//! Builds a starter ruleset from the benchmark names found in some results.

use crate::Result;
use crate::rules::document::{CategoryEntry, IncludesEntry, MetricEntry, RuleEntry, RulesetDocument};
use crate::rules::{MetricName, RuleStore, titleize};
use std::collections::HashSet;

const GENERATED_NAME: &str = "Generated Config";
const CATCH_ALL_ID: &str = "all";
const CATCH_ALL_TITLE: &str = "All Benchmarks ({metric})";

/// Derive a function id from a benchmark name.
///
/// The `Benchmark` prefix, a following `_` and a trailing `-<GOMAXPROCS>` suffix are
/// removed; `/` and `_` become `-` and the result is lower-cased.
#[must_use]
pub fn bench_name_to_id(name: &str) -> String {
    let id = name.strip_prefix("Benchmark").unwrap_or(name);
    let mut id = id.strip_prefix('_').unwrap_or(id);

    if let Some(idx) = id.rfind('-')
        && idx > 0
    {
        let suffix = &id[idx + 1..];
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            id = &id[..idx];
        }
    }

    id.chars()
        .map(|c| if matches!(c, '/' | '_') { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Build a ruleset with one function per distinct benchmark and a single category
/// holding all of them.
///
/// Metric titles and axis labels come from `defaults` when it describes the metric.
/// Render settings are inherited from `defaults`.
#[must_use]
pub fn synthesize<S: AsRef<str>>(record_names: &[S], metric_ids: &[MetricName], defaults: &RulesetDocument) -> RulesetDocument {
    let metrics: Vec<MetricEntry> = metric_ids
        .iter()
        .map(|metric| {
            let id = metric.to_string();
            defaults.metrics.iter().find(|m| m.id == id).cloned().unwrap_or_else(|| MetricEntry {
                title: titleize(&id),
                id,
                axis_label: String::new(),
            })
        })
        .collect();

    let mut seen = HashSet::new();
    let functions: Vec<RuleEntry> = record_names
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|name| {
            let id = bench_name_to_id(name);
            seen.insert(id.clone()).then(|| RuleEntry {
                title: titleize(&id),
                id,
                match_pattern: Some(regex::escape(name)),
                not_match_pattern: None,
            })
        })
        .collect();

    let category = CategoryEntry {
        id: CATCH_ALL_ID.to_string(),
        title: CATCH_ALL_TITLE.to_string(),
        includes: IncludesEntry {
            functions: functions.iter().map(|f| f.id.clone()).collect(),
            versions: Vec::new(),
            contexts: Vec::new(),
            metrics: metrics.iter().map(|m| m.id.clone()).collect(),
        },
    };

    RulesetDocument {
        name: GENERATED_NAME.to_string(),
        environment: String::new(),
        render: defaults.render.clone(),
        metrics,
        functions,
        contexts: Vec::new(),
        versions: Vec::new(),
        categories: vec![category],
        files: Vec::new(),
    }
}

impl RuleStore {
    /// Synthesize a ruleset from benchmark names and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the synthesized ruleset does not validate, which happens
    /// when no metric is supplied.
    pub fn generate<S: AsRef<str>>(record_names: &[S], metric_ids: &[MetricName], defaults: &RulesetDocument) -> Result<Self> {
        Self::from_document(&synthesize(record_names, metric_ids, defaults))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_name_to_id() {
        let cases = [
            ("BenchmarkGreater-16", "greater"),
            ("Benchmark_isEmpty-16", "isempty"),
            ("BenchmarkElementsMatch/generic/large_1000-16", "elementsmatch-generic-large-1000"),
            ("BenchmarkLess", "less"),
            ("BenchmarkSort/size-100", "sort-size"),
            ("BenchmarkSort/size-1x", "sort-size-1x"),
            ("Benchmark-8", "-8"),
            ("NotABenchmark-4", "notabenchmark"),
        ];

        for (name, expected) in cases {
            assert_eq!(bench_name_to_id(name), expected, "bench_name_to_id({name:?})");
        }
    }

    #[test]
    fn test_synthesize() {
        let defaults = RulesetDocument::defaults().unwrap();
        let names = [
            "BenchmarkGreater/reflect/int-16",
            "BenchmarkGreater/reflect/int-16",
            "BenchmarkGreater/reflect/int-8",
            "BenchmarkLess(x)-16",
        ];

        let doc = synthesize(&names, &[MetricName::NsPerOp, MetricName::AllocsPerOp], &defaults);

        assert_eq!(doc.name, "Generated Config");
        assert_eq!(doc.render, defaults.render);

        let ids: Vec<_> = doc.functions.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["greater-reflect-int", "less(x)"]);
        assert_eq!(doc.functions[0].title, "Greater Reflect Int");
        assert_eq!(doc.functions[0].match_pattern.as_deref(), Some("BenchmarkGreater/reflect/int\\-16"));
        assert_eq!(doc.functions[1].match_pattern.as_deref(), Some("BenchmarkLess\\(x\\)\\-16"));

        assert_eq!(doc.metrics.len(), 2);
        assert_eq!(doc.metrics[0].title, "Benchmark Timings");
        assert_eq!(doc.metrics[1].axis_label, "allocs/op");

        assert_eq!(doc.categories.len(), 1);
        let all = &doc.categories[0];
        assert_eq!(all.id, "all");
        assert_eq!(all.title, "All Benchmarks ({metric})");
        assert_eq!(all.includes.functions, vec!["greater-reflect-int", "less(x)"]);
        assert_eq!(all.includes.metrics, vec!["nsPerOp", "allocsPerOp"]);
        assert!(all.includes.versions.is_empty());
        assert!(all.includes.contexts.is_empty());
    }

    #[test]
    fn test_metric_missing_from_defaults_is_titleized() {
        let mut defaults = RulesetDocument::defaults().unwrap();
        defaults.metrics.clear();

        let doc = synthesize(&["BenchmarkX-2"], &[MetricName::MBytesPerS], &defaults);
        assert_eq!(doc.metrics[0].id, "MBytesPerS");
        assert_eq!(doc.metrics[0].title, "MBytesPerS");
    }

    #[test]
    fn test_generate_validates() {
        let defaults = RulesetDocument::defaults().unwrap();
        let names = ["BenchmarkGreater-16", "BenchmarkLess-16"];

        let store = RuleStore::generate(&names, &[MetricName::NsPerOp], &defaults).unwrap();
        assert_eq!(store.functions().len(), 2);
        assert_eq!(store.find_function("BenchmarkLess-16"), Some("less"));
        assert_eq!(store.categories()[0].includes.functions, vec!["greater", "less"]);

        let err = RuleStore::generate(&names, &[], &defaults).unwrap_err();
        assert!(err.to_string().contains("at least 1 metric must be included"), "{err}");
    }
}
