use crate::rules::MetricName;
use serde::Serialize;

/// A validated metric: which benchmark field to chart and how to label it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub id: MetricName,
    pub title: String,
    pub axis_label: String,
}
