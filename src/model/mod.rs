//! The chart-ready output of the organizer.
//!
//! A [`Scenario`] is one page of charts. Each [`Category`] is one chart, holding one
//! [`CategoryData`] per configured `(metric, version)` pair. Each of those carries a
//! single [`Series`], titled after the version, whose [`Point`]s are the
//! `(function, context)` measurements.

mod series;

pub use series::{Point, Series, SeriesKey};

use crate::rules::Metric;
use serde::Serialize;
use std::collections::HashSet;

/// Placeholder substituted with the metric title in category titles
pub const METRIC_PLACEHOLDER: &str = "{metric}";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub categories: Vec<Category>,
}

/// One chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub environment: String,
    pub data: Vec<CategoryData>,
}

impl Category {
    /// The distinct metrics drawn on this chart, in order of appearance.
    #[must_use]
    pub fn metrics(&self) -> Vec<&Metric> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .map(|data| &data.metric)
            .filter(|metric| seen.insert(metric.id))
            .collect()
    }

    /// The distinct `"{function} - {context}"` X-axis labels, in order of appearance.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .flat_map(|data| &data.series)
            .flat_map(|series| &series.points)
            .filter(|point| seen.insert((point.key.function.as_str(), point.key.context.as_str())))
            .map(|point| format!("{} - {}", point.key.function, point.key.context))
            .collect()
    }

    /// The category title with `{metric}` replaced by the metric title.
    #[must_use]
    pub fn title_with_placeholders(&self, metric: &Metric) -> String {
        self.title.replace(METRIC_PLACEHOLDER, &metric.title)
    }

    /// Total number of points across every series of the chart.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .flat_map(|data| &data.series)
            .map(|series| series.points.len())
            .sum()
    }
}

/// The data drawn for one metric and one version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryData {
    pub metric: Metric,
    pub version: VersionRef,
    pub series: Vec<Series>,
}

/// Identifies the version a [`CategoryData`] was built for. The id is empty for unversioned data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRef {
    pub id: String,
    pub title: String,
}
