use crate::Result;
use crate::rules::document::{CategoryEntry, FileEntry, MetricEntry, RuleEntry, RulesetDocument};
use crate::rules::{Category, FileRule, Includes, MatchRule, Metric, MetricName, RenderSettings, RuleKind, titleize};
use camino::Utf8Path;
use core::fmt::Display;
use ohno::{IntoAppError, bail};
use std::collections::HashMap;

const LOG_TARGET: &str = "     rules";

/// The validated, indexed form of a ruleset.
///
/// A store is built once from a [`RulesetDocument`] and never changes afterwards.
#[derive(Debug, Clone)]
pub struct RuleStore {
    name: String,
    environment: String,
    render: RenderSettings,
    metrics: Vec<Metric>,
    functions: Vec<MatchRule>,
    contexts: Vec<MatchRule>,
    versions: Vec<MatchRule>,
    categories: Vec<Category>,
    files: Vec<FileRule>,

    function_index: HashMap<String, usize>,
    context_index: HashMap<String, usize>,
    version_index: HashMap<String, usize>,
    metric_index: HashMap<MetricName, usize>,
}

impl RuleStore {
    /// Load a ruleset file, overlay it on `defaults` and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the merged ruleset is invalid.
    pub fn load(path: &Utf8Path, defaults: &RulesetDocument) -> Result<Self> {
        let doc = RulesetDocument::load(path, defaults)?;
        Self::from_document(&doc)
    }

    /// Validate a ruleset document and build its lookup indices.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid entry found.
    pub fn from_document(doc: &RulesetDocument) -> Result<Self> {
        let (functions, function_index) = build_rules(RuleKind::Function, &doc.functions)?;
        let (contexts, context_index) = build_rules(RuleKind::Context, &doc.contexts)?;
        let (versions, version_index) = build_rules(RuleKind::Version, &doc.versions)?;
        let (metrics, metric_index) = build_metrics(&doc.metrics)?;

        let mut store = Self {
            name: doc.name.clone(),
            environment: doc.environment.clone(),
            render: doc.render.clone(),
            metrics,
            functions,
            contexts,
            versions,
            categories: Vec::new(),
            files: Vec::new(),
            function_index,
            context_index,
            version_index,
            metric_index,
        };

        let mut seen = HashMap::with_capacity(doc.categories.len());
        let mut categories = Vec::with_capacity(doc.categories.len());
        for (i, entry) in doc.categories.iter().enumerate() {
            categories.push(store.build_category(i, entry, &mut seen)?);
        }
        store.categories = categories;

        store.files = doc
            .files
            .iter()
            .enumerate()
            .map(|(i, entry)| store.build_file(i, entry))
            .collect::<Result<_>>()?;

        log::debug!(
            target: LOG_TARGET,
            "Loaded ruleset '{}': {} functions, {} contexts, {} versions, {} metrics, {} categories, {} file rules",
            store.name,
            store.functions.len(),
            store.contexts.len(),
            store.versions.len(),
            store.metrics.len(),
            store.categories.len(),
            store.files.len()
        );

        Ok(store)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Environment label forced by the ruleset, empty when unset.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    #[must_use]
    pub const fn render(&self) -> &RenderSettings {
        &self.render
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    #[must_use]
    pub fn functions(&self) -> &[MatchRule] {
        &self.functions
    }

    #[must_use]
    pub fn contexts(&self) -> &[MatchRule] {
        &self.contexts
    }

    #[must_use]
    pub fn versions(&self) -> &[MatchRule] {
        &self.versions
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn files(&self) -> &[FileRule] {
        &self.files
    }

    #[must_use]
    pub fn get_function(&self, id: &str) -> Option<&MatchRule> {
        self.function_index.get(id).map(|&i| &self.functions[i])
    }

    #[must_use]
    pub fn get_context(&self, id: &str) -> Option<&MatchRule> {
        self.context_index.get(id).map(|&i| &self.contexts[i])
    }

    #[must_use]
    pub fn get_version(&self, id: &str) -> Option<&MatchRule> {
        self.version_index.get(id).map(|&i| &self.versions[i])
    }

    #[must_use]
    pub fn get_metric(&self, id: MetricName) -> Option<&Metric> {
        self.metric_index.get(&id).map(|&i| &self.metrics[i])
    }

    fn build_category(&self, i: usize, entry: &CategoryEntry, seen: &mut HashMap<String, usize>) -> Result<Category> {
        if entry.id.is_empty() {
            bail!("invalid categories: empty ID found: categories[{i}]");
        }

        if let Some(first) = seen.insert(entry.id.clone(), i) {
            bail!("invalid categories: duplicate ID key found: categories[{i}]={} (first declared at categories[{first}])", entry.id);
        }

        let id = &entry.id;
        let includes = &entry.includes;

        let functions = resolve_includes(id, "functions", &includes.functions, &self.function_index, &self.functions)?;
        let contexts = resolve_includes(id, "contexts", &includes.contexts, &self.context_index, &self.contexts)?;
        let versions = resolve_includes(id, "versions", &includes.versions, &self.version_index, &self.versions)?;

        let mut metrics = Vec::with_capacity(includes.metrics.len());
        for (j, reference) in includes.metrics.iter().enumerate() {
            match reference.parse::<MetricName>() {
                Ok(metric) if self.metric_index.contains_key(&metric) => metrics.push(metric),
                _ => bail!("invalid category: metric ID not found categories.{id}.includes.metrics[{j}]={reference}"),
            }
        }

        if metrics.is_empty() {
            bail!("invalid category: at least 1 metric must be included in a category: categories.{id}.includes.metrics");
        }

        if metrics.len() > 2 {
            log::warn!(
                target: LOG_TARGET,
                "Category '{id}' includes {} metrics, charts usually show at most 2 scales",
                metrics.len()
            );
        }

        Ok(Category {
            id: id.clone(),
            title: title_or_default(&entry.title, id),
            includes: Includes {
                functions,
                versions,
                contexts,
                metrics,
            },
        })
    }

    fn build_file(&self, i: usize, entry: &FileEntry) -> Result<FileRule> {
        if entry.id.is_empty() {
            bail!("missing ID for file in files[{i}]");
        }

        if entry.match_file_pattern.is_empty() {
            log::warn!(target: LOG_TARGET, "File rule '{}' has no file pattern and will never match", entry.id);
        }

        let contexts = build_nested(i, "contexts", &entry.contexts, &self.context_index)?;
        let versions = build_nested(i, "versions", &entry.versions, &self.version_index)?;

        FileRule::new(&entry.id, &entry.match_file_pattern, contexts, versions)
            .into_app_err_with(|| format!("invalid regexp[files[{i}] - {}]", entry.id))
    }
}

fn build_rules(kind: RuleKind, entries: &[RuleEntry]) -> Result<(Vec<MatchRule>, HashMap<String, usize>)> {
    let collection = kind.collection();
    let mut rules = Vec::with_capacity(entries.len());
    let mut index = HashMap::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        if entry.id.is_empty() {
            bail!("invalid {collection}: empty ID found: {collection}[{i}]");
        }

        if let Some(first) = index.insert(entry.id.clone(), i) {
            bail!("invalid {collection}: duplicate ID key found: {collection}[{i}]={} (first declared at {collection}[{first}])", entry.id);
        }

        let rule = MatchRule::new(
            &entry.id,
            title_or_default(&entry.title, &entry.id),
            entry.match_pattern.as_deref(),
            entry.not_match_pattern.as_deref(),
        )
        .into_app_err_with(|| format!("invalid regexp[{kind} {i} - {}]", entry.id))?;

        rules.push(rule);
    }

    Ok((rules, index))
}

fn build_metrics(entries: &[MetricEntry]) -> Result<(Vec<Metric>, HashMap<MetricName, usize>)> {
    let mut metrics = Vec::with_capacity(entries.len());
    let mut index = HashMap::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        if entry.id.is_empty() {
            bail!("invalid metrics: empty ID found: metrics[{i}]");
        }

        let Ok(id) = entry.id.parse::<MetricName>() else {
            bail!(
                "invalid metrics: invalid metric ID: metrics[{i}]={} (should be one of {})",
                entry.id,
                join(&MetricName::all())
            );
        };

        if index.insert(id, i).is_some() {
            bail!("invalid metrics: duplicate ID key found: metrics[{i}]={id}");
        }

        metrics.push(Metric {
            id,
            title: title_or_default(&entry.title, &entry.id),
            axis_label: if entry.axis_label.is_empty() {
                id.unit().to_string()
            } else {
                entry.axis_label.clone()
            },
        });
    }

    Ok((metrics, index))
}

/// Check category references against an index, or expand an empty list to every defined id.
fn resolve_includes(
    category: &str,
    collection: &str,
    references: &[String],
    index: &HashMap<String, usize>,
    defined: &[MatchRule],
) -> Result<Vec<String>> {
    if references.is_empty() {
        return Ok(defined.iter().map(|rule| rule.id().to_string()).collect());
    }

    for (j, reference) in references.iter().enumerate() {
        if !index.contains_key(reference) {
            let kind = collection.trim_end_matches('s');
            bail!("invalid category: {kind} ID not found categories.{category}.includes.{collection}[{j}]={reference}");
        }
    }

    Ok(references.to_vec())
}

fn build_nested(file: usize, collection: &str, entries: &[RuleEntry], index: &HashMap<String, usize>) -> Result<Vec<MatchRule>> {
    entries
        .iter()
        .enumerate()
        .map(|(j, entry)| {
            if !index.contains_key(&entry.id) {
                let kind = collection.trim_end_matches('s');
                bail!("invalid file: {kind} ID not found files[{file}].{collection}[{j}]={}", entry.id);
            }

            MatchRule::new(
                &entry.id,
                title_or_default(&entry.title, &entry.id),
                entry.match_pattern.as_deref(),
                entry.not_match_pattern.as_deref(),
            )
            .into_app_err_with(|| format!("invalid regexp[files[{file}].{collection}[{j}] - {}]", entry.id))
        })
        .collect()
}

fn title_or_default(title: &str, id: &str) -> String {
    if title.is_empty() { titleize(id) } else { title.to_string() }
}

fn join<T: Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
