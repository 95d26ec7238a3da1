use crate::rules::MetricName;
use serde::Serialize;

/// Identifies a benchmark series by function, version, context and metric.
///
/// Empty components are wildcards: a series spanning every function of a chart has an
/// empty function id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeriesKey {
    pub function: String,
    pub version: String,
    pub context: String,
    pub metric: MetricName,
}

impl SeriesKey {
    #[must_use]
    pub fn new(function: &str, version: &str, context: &str, metric: MetricName) -> Self {
        Self {
            function: function.to_string(),
            version: version.to_string(),
            context: context.to_string(),
            metric,
        }
    }

    /// The `"{function} - {version} - {context}"` label used for points.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {} - {}", self.function, self.version, self.context)
    }
}

/// One bar series of a chart. The title appears in the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub key: SeriesKey,
    pub title: String,
    pub points: Vec<Point>,
}

impl Series {
    /// The point labels, in point order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|point| point.label.as_str()).collect()
    }
}

/// A single measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub key: SeriesKey,
    pub label: String,
    pub value: f64,
}

impl Point {
    #[must_use]
    pub fn new(key: SeriesKey, value: f64) -> Self {
        Self {
            label: key.label(),
            key,
            value,
        }
    }
}
