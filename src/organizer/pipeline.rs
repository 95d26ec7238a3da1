use crate::Result;
use crate::input::{InputGroup, RawRecord};
use crate::model::{Category, CategoryData, Scenario, Series, SeriesKey, VersionRef};
use crate::organizer::{ClassifiedObservation, ObservationSet};
use crate::rules::{self, Metric, MetricName, RuleStore};
use ohno::bail;

const LOG_TARGET: &str = " organizer";

/// Turns benchmark records into a [`Scenario`] under a [`RuleStore`].
///
/// Organizing runs in two passes: every record is first classified into observations,
/// then each configured category is assembled from those observations.
///
/// In strict mode, every condition that would otherwise be logged and skipped (an
/// unmatched record, a record without metrics, an empty result, an empty category)
/// aborts with an error.
#[derive(Debug, Clone)]
pub struct Organizer<'a> {
    rules: &'a RuleStore,
    strict: bool,
    environment: Option<String>,
}

impl<'a> Organizer<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleStore) -> Self {
        Self {
            rules,
            strict: false,
            environment: None,
        }
    }

    /// Turn warnings into errors.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Force the environment shown on every category, overriding both the ruleset and
    /// the environment detected in the inputs.
    #[must_use]
    pub fn environment(mut self, environment: Option<String>) -> Self {
        self.environment = environment.filter(|env| !env.is_empty());
        self
    }

    /// Classify and assemble all inputs.
    ///
    /// # Errors
    ///
    /// Returns an error only in strict mode, when a record or category cannot be resolved.
    pub fn scenarize(&self, groups: &[InputGroup]) -> Result<Scenario> {
        let observations = self.classify(groups)?;
        self.assemble(&observations)
    }

    /// The environment override in effect: the run-level one, else the ruleset's.
    fn forced_environment(&self) -> Option<&str> {
        self.environment
            .as_deref()
            .or_else(|| Some(self.rules.environment()).filter(|env| !env.is_empty()))
    }

    /// Classify every record of every input into observations.
    ///
    /// # Errors
    ///
    /// In strict mode, returns an error for the first record without a function or
    /// without any metric, or when no observation is produced at all.
    pub fn classify(&self, groups: &[InputGroup]) -> Result<ObservationSet> {
        let mut observations = Vec::new();

        for group in groups {
            let environment = self.forced_environment().unwrap_or(group.environment.as_str());

            for record in &group.records {
                let Some(function) = self.rules.find_function(&record.name) else {
                    log::warn!(target: LOG_TARGET, "Benchmark '{}' from {} not ingested: no function matched", record.name, group.source_file);
                    if self.strict {
                        bail!("strict requirement not met for benchmark '{}': no function matched", record.name);
                    }
                    continue;
                };

                let before = observations.len();
                self.classify_record(record, function, &group.source_file, environment, &mut observations);

                if observations.len() == before {
                    log::warn!(target: LOG_TARGET, "Benchmark '{}' from {} has no configured metric", record.name, group.source_file);
                    if self.strict {
                        bail!("strict requirement not met for benchmark '{}': no metric resolved", record.name);
                    }
                }
            }
        }

        if observations.is_empty() {
            log::warn!(target: LOG_TARGET, "No benchmark was ingested");
            if self.strict {
                bail!("strict requirement not met: empty benchmark set");
            }
        }

        log::debug!(target: LOG_TARGET, "Classified {} observations", observations.len());
        Ok(ObservationSet::new(observations))
    }

    fn classify_record(&self, record: &RawRecord, function: &str, file: &str, environment: &str, out: &mut Vec<ClassifiedObservation>) {
        let version = self
            .rules
            .find_version(&record.name)
            .or_else(|| self.rules.find_version_from_file(file))
            .unwrap_or_default();

        let context = self
            .rules
            .find_context(&record.name)
            .or_else(|| self.rules.find_context_from_file(file))
            .unwrap_or_default();

        if version.is_empty() && context.is_empty() {
            log::warn!(target: LOG_TARGET, "Benchmark '{}': no version and no context matched", record.name);
        }

        for metric in MetricName::all() {
            if let Some(value) = record.metric_value(metric)
                && self.rules.get_metric(metric).is_some()
            {
                out.push(ClassifiedObservation::new(function, version, context, metric, value, environment));
            }
        }
    }

    /// Build one chart per configured category.
    ///
    /// # Errors
    ///
    /// In strict mode, returns an error for the first category without any point.
    pub fn assemble(&self, observations: &ObservationSet) -> Result<Scenario> {
        let environment = self.forced_environment().unwrap_or_else(|| observations.environment());
        let mut categories = Vec::with_capacity(self.rules.categories().len());

        for config in self.rules.categories() {
            let category = self.assemble_category(config, observations, environment);

            if category.point_count() == 0 {
                log::warn!(target: LOG_TARGET, "No data resolved for category '{}'", category.id);
                if self.strict {
                    bail!("strict requirement not met for category '{}': no data for category", category.id);
                }
                continue;
            }

            categories.push(category);
        }

        log::info!(target: LOG_TARGET, "Resolved {} categories", categories.len());

        Ok(Scenario {
            name: self.rules.name().to_string(),
            categories,
        })
    }

    fn assemble_category(&self, config: &rules::Category, observations: &ObservationSet, environment: &str) -> Category {
        let includes = &config.includes;
        let no_context = [String::new()];
        let contexts: &[String] = if includes.contexts.is_empty() { &no_context } else { &includes.contexts };

        let mut data = Vec::new();
        for metric in includes.metrics.iter().filter_map(|&id| self.rules.get_metric(id)) {
            for version in self.versions_of(config, metric) {
                let points = observations.series_for(metric.id, &version.id, &includes.functions, contexts);

                data.push(CategoryData {
                    metric: metric.clone(),
                    series: vec![Series {
                        key: SeriesKey::new("", &version.id, "", metric.id),
                        title: version.title.clone(),
                        points,
                    }],
                    version,
                });
            }
        }

        Category {
            id: config.id.clone(),
            title: config.title.clone(),
            environment: environment.to_string(),
            data,
        }
    }

    /// The versions drawn for a metric; unversioned data is titled after the metric.
    fn versions_of(&self, config: &rules::Category, metric: &Metric) -> Vec<VersionRef> {
        if config.includes.versions.is_empty() {
            return vec![VersionRef {
                id: String::new(),
                title: metric.title.clone(),
            }];
        }

        config
            .includes
            .versions
            .iter()
            .map(|id| VersionRef {
                id: id.clone(),
                title: self.rules.get_version(id).map_or_else(|| id.clone(), |v| v.title().to_string()),
            })
            .collect()
    }
}
