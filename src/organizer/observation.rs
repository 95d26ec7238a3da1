use crate::model::{Point, SeriesKey};
use crate::rules::MetricName;

/// One metric value of one classified benchmark record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedObservation {
    pub key: SeriesKey,
    pub value: f64,
    pub environment: String,
}

impl ClassifiedObservation {
    #[must_use]
    pub fn new(function: &str, version: &str, context: &str, metric: MetricName, value: f64, environment: &str) -> Self {
        Self {
            key: SeriesKey::new(function, version, context, metric),
            value,
            environment: environment.to_string(),
        }
    }
}

/// Every observation produced from a run's inputs, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    observations: Vec<ClassifiedObservation>,
}

impl ObservationSet {
    #[must_use]
    pub fn new(observations: Vec<ClassifiedObservation>) -> Self {
        Self { observations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedObservation> {
        self.observations.iter()
    }

    /// The first non-empty environment, or an empty string.
    #[must_use]
    pub fn environment(&self) -> &str {
        self.observations
            .iter()
            .map(|o| o.environment.as_str())
            .find(|env| !env.is_empty())
            .unwrap_or_default()
    }

    /// The points of one `(metric, version)` series.
    ///
    /// Points are ordered by function, then context, following the given lists; within
    /// one `(function, context)` pair they keep input order. Duplicate measurements
    /// produce separate points.
    #[must_use]
    pub fn series_for(&self, metric: MetricName, version: &str, functions: &[String], contexts: &[String]) -> Vec<Point> {
        let mut points = Vec::new();

        for function in functions {
            for context in contexts {
                points.extend(
                    self.observations
                        .iter()
                        .filter(|o| {
                            o.key.metric == metric && o.key.function == *function && o.key.version == version && o.key.context == *context
                        })
                        .map(|o| Point::new(o.key.clone(), o.value)),
                );
            }
        }

        points
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a ClassifiedObservation;
    type IntoIter = core::slice::Iter<'a, ClassifiedObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
