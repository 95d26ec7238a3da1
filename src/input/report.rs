use crate::input::InputGroup;
use crate::rules::MetricName;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A summary of what was found in some benchmark inputs.
///
/// Used to inspect inputs before writing a ruleset, and to synthesize one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsingReport {
    /// Number of inputs read
    #[serde(rename = "sets")]
    pub set_count: usize,

    pub analyzed_files: Vec<String>,

    /// Distinct benchmark names, sorted
    #[serde(rename = "benchmark_functions")]
    pub functions: Vec<String>,

    /// Value ranges per metric, in order of first appearance
    #[serde(rename = "benchmark_metrics")]
    pub metrics: Vec<MinMaxRange>,

    /// One entry per benchmark record
    #[serde(rename = "benchmark_signatures")]
    pub signatures: Vec<Signature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signature {
    #[serde(rename = "benchmark_name")]
    pub name: String,

    pub available_metrics: Vec<MinMaxRange>,

    pub environment: String,
}

/// The range of the strictly positive values of one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinMaxRange {
    pub metric: MetricName,

    #[serde(rename = "measurements_count")]
    pub count: usize,

    #[serde(rename = "min_value")]
    pub min: f64,

    #[serde(rename = "max_value")]
    pub max: f64,

    /// Inputs the values came from
    #[serde(rename = "origin_files")]
    pub origins: Vec<String>,
}

impl MinMaxRange {
    fn single(metric: MetricName, value: f64, origin: &str) -> Self {
        Self {
            metric,
            count: 1,
            min: value,
            max: value,
            origins: vec![origin.to_string()],
        }
    }

    fn absorb(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.count += other.count;
        for origin in &other.origins {
            if !self.origins.contains(origin) {
                self.origins.push(origin.clone());
            }
        }
    }
}

impl ParsingReport {
    #[must_use]
    pub fn new(groups: &[InputGroup]) -> Self {
        let mut report = Self {
            set_count: groups.len(),
            ..Self::default()
        };

        let mut seen_files = HashSet::new();
        let mut seen_functions = HashSet::new();

        for group in groups {
            if seen_files.insert(group.source_file.as_str()) {
                report.analyzed_files.push(group.source_file.clone());
            }

            for record in &group.records {
                if seen_functions.insert(record.name.as_str()) {
                    report.functions.push(record.name.clone());
                }

                let available_metrics = MetricName::all()
                    .into_iter()
                    .filter_map(|metric| {
                        record
                            .metric_value(metric)
                            .filter(|&value| value > 0.0)
                            .map(|value| MinMaxRange::single(metric, value, &group.source_file))
                    })
                    .collect();

                report.signatures.push(Signature {
                    name: record.name.clone(),
                    available_metrics,
                    environment: group.environment.clone(),
                });
            }
        }

        let mut metric_index: HashMap<MetricName, usize> = HashMap::new();
        for range in report.signatures.iter().flat_map(|s| &s.available_metrics) {
            if let Some(&i) = metric_index.get(&range.metric) {
                report.metrics[i].absorb(range);
            } else {
                let _ = metric_index.insert(range.metric, report.metrics.len());
                report.metrics.push(range.clone());
            }
        }

        report.functions.sort();
        report
    }

    /// The metrics with at least one measurement, in order of first appearance.
    #[must_use]
    pub fn metric_names(&self) -> Vec<MetricName> {
        self.metrics.iter().map(|range| range.metric).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawRecord;

    fn record(name: &str, ns: f64, allocs: u64) -> RawRecord {
        RawRecord {
            ns_per_op: Some(ns),
            allocs_per_op: Some(allocs),
            ..RawRecord::new(name, 100)
        }
    }

    fn groups() -> Vec<InputGroup> {
        vec![
            InputGroup {
                source_file: "a.txt".to_string(),
                environment: "linux amd64".to_string(),
                records: vec![record("BenchmarkLess-8", 10.0, 0), record("BenchmarkGreater-8", 30.0, 2)],
            },
            InputGroup {
                source_file: "b.txt".to_string(),
                environment: "darwin arm64".to_string(),
                records: vec![record("BenchmarkGreater-8", 5.0, 4)],
            },
        ]
    }

    #[test]
    fn test_report() {
        let report = ParsingReport::new(&groups());

        assert_eq!(report.set_count, 2);
        assert_eq!(report.analyzed_files, vec!["a.txt", "b.txt"]);
        assert_eq!(report.functions, vec!["BenchmarkGreater-8", "BenchmarkLess-8"]);
        assert_eq!(report.signatures.len(), 3);
        assert_eq!(report.signatures[2].environment, "darwin arm64");

        // zero allocations are not measurements
        assert_eq!(report.signatures[0].available_metrics.len(), 1);

        assert_eq!(report.metric_names(), vec![MetricName::NsPerOp, MetricName::AllocsPerOp]);

        let ns = &report.metrics[0];
        assert_eq!(ns.count, 3);
        assert!((ns.min - 5.0).abs() < f64::EPSILON);
        assert!((ns.max - 30.0).abs() < f64::EPSILON);
        assert_eq!(ns.origins, vec!["a.txt", "b.txt"]);

        let allocs = &report.metrics[1];
        assert_eq!(allocs.count, 2);
        assert!((allocs.min - 2.0).abs() < f64::EPSILON);
        assert!((allocs.max - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_json_keys() {
        let groups = vec![InputGroup {
            source_file: "-".to_string(),
            environment: "unknown environment".to_string(),
            records: vec![RawRecord {
                ns_per_op: Some(1.5),
                ..RawRecord::new("BenchmarkX", 1)
            }],
        }];

        let json = serde_json::to_string_pretty(&ParsingReport::new(&groups)).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "sets": 1,
          "analyzed_files": [
            "-"
          ],
          "benchmark_functions": [
            "BenchmarkX"
          ],
          "benchmark_metrics": [
            {
              "metric": "nsPerOp",
              "measurements_count": 1,
              "min_value": 1.5,
              "max_value": 1.5,
              "origin_files": [
                "-"
              ]
            }
          ],
          "benchmark_signatures": [
            {
              "benchmark_name": "BenchmarkX",
              "available_metrics": [
                {
                  "metric": "nsPerOp",
                  "measurements_count": 1,
                  "min_value": 1.5,
                  "max_value": 1.5,
                  "origin_files": [
                    "-"
                  ]
                }
              ],
              "environment": "unknown environment"
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_empty_report() {
        let report = ParsingReport::new(&[]);
        assert_eq!(report, ParsingReport::default());
        assert!(report.metric_names().is_empty());
    }
}
