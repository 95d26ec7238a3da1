use crate::Result;
use crate::rules::render::RenderSettings;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;

/// The default ruleset YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

/// The declarative ruleset, as written by users and before any validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RulesetDocument {
    #[serde(default)]
    pub name: String,

    /// Environment label forced on every category
    #[serde(default)]
    pub environment: String,

    #[serde(default)]
    pub render: RenderSettings,

    #[serde(default)]
    pub metrics: Vec<MetricEntry>,

    #[serde(default)]
    pub functions: Vec<RuleEntry>,

    #[serde(default)]
    pub contexts: Vec<RuleEntry>,

    #[serde(default)]
    pub versions: Vec<RuleEntry>,

    #[serde(default)]
    pub categories: Vec<CategoryEntry>,

    /// Fallback rules keyed by input file name
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// A function, context or version rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Regular expression the name must match
    #[serde(default, alias = "match", skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,

    /// Regular expression the name must not match
    #[serde(default, alias = "not_match", skip_serializing_if = "Option::is_none")]
    pub not_match_pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricEntry {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, alias = "axis", skip_serializing_if = "String::is_empty")]
    pub axis_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default)]
    pub includes: IncludesEntry,
}

/// Ids referenced by a category. Empty lists of functions, versions or contexts mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IncludesEntry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<String>,

    #[serde(default)]
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileEntry {
    #[serde(default)]
    pub id: String,

    /// Regular expression matched against the input file name
    #[serde(default, alias = "match_file")]
    pub match_file_pattern: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<RuleEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<RuleEntry>,
}

/// Serialization formats understood for ruleset documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error for any extension other than `yml`, `yaml`, `toml` or `json`.
    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let extension = path.extension().unwrap_or_default();
        match extension {
            "yml" | "yaml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(app_err!("unsupported ruleset file extension '{extension}' for {path}")),
        }
    }

    /// Parse `text` into a generic value tree.
    fn parse_value(self, text: &str, origin: &str) -> Result<Value> {
        let value: Value = match self {
            Self::Yaml => serde_yaml::from_str(text).into_app_err_with(|| format!("parsing YAML ruleset from {origin}"))?,
            Self::Toml => toml::from_str(text).into_app_err_with(|| format!("parsing TOML ruleset from {origin}"))?,
            Self::Json => serde_json::from_str(text).into_app_err_with(|| format!("parsing JSON ruleset from {origin}"))?,
        };

        // an empty YAML file is a null document
        Ok(if value.is_null() { Value::Mapping(serde_yaml::Mapping::new()) } else { value })
    }

    /// Serialize a value in this format. `target` names the destination in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented in the format.
    pub fn serialize<T: Serialize>(self, value: &T, target: &str) -> Result<String> {
        match self {
            Self::Yaml => serde_yaml::to_string(value).into_app_err_with(|| format!("serializing YAML for {target}")),
            Self::Toml => toml::to_string_pretty(value).into_app_err_with(|| format!("serializing TOML for {target}")),
            Self::Json => serde_json::to_string_pretty(value).into_app_err_with(|| format!("serializing JSON for {target}")),
        }
    }
}

impl RulesetDocument {
    /// Parse the embedded default ruleset.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_config.yml` does not describe a ruleset.
    pub fn defaults() -> Result<Self> {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).into_app_err("parsing the embedded default ruleset")
    }

    /// Load a ruleset file and overlay it on `defaults`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported extension, or
    /// does not describe a ruleset.
    pub fn load(path: &Utf8Path, defaults: &Self) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading ruleset from {path}"))?;
        Self::parse(&text, format, path.as_str(), defaults)
    }

    /// Parse ruleset text and overlay it on `defaults`.
    ///
    /// `origin` names the source of the text in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or contains unknown fields.
    pub fn parse(text: &str, format: DocumentFormat, origin: &str, defaults: &Self) -> Result<Self> {
        let user = format.parse_value(text, origin)?;
        let mut merged = serde_yaml::to_value(defaults).into_app_err("converting the default ruleset")?;
        merge_values(&mut merged, user);
        serde_yaml::from_value(merged).into_app_err_with(|| format!("decoding ruleset from {origin}"))
    }

    /// Save the ruleset, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let text = DocumentFormat::from_path(output_path)?.serialize(self, output_path.as_str())?;

        fs::write(output_path, text).into_app_err_with(|| format!("writing ruleset to {output_path}"))?;
        Ok(())
    }

    /// Save the default ruleset, preserving its comments when writing YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_with_comments(output_path: &Utf8Path) -> Result<()> {
        if matches!(DocumentFormat::from_path(output_path)?, DocumentFormat::Yaml) {
            fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing default ruleset to {output_path}"))?;
            Ok(())
        } else {
            Self::defaults()?.save(output_path)
        }
    }
}

impl Default for RulesetDocument {
    fn default() -> Self {
        Self::defaults().expect("default_config.yml should be valid YAML that deserializes to a ruleset")
    }
}

/// Deep-merge `overlay` into `base`.
///
/// Mappings merge key by key. Any other overlay value replaces the base value, except
/// null, which leaves the base untouched.
pub fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        if !value.is_null() {
                            let _ = base_map.insert(key, value);
                        }
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
