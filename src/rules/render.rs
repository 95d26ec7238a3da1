use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Settings handed through to the chart renderer.
///
/// Every field has a default, so a ruleset may override only the settings it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct RenderSettings {
    /// Page title
    pub title: String,

    /// Name of the chart color theme
    pub theme: String,

    /// How charts are arranged on the page
    pub layout: Layout,

    /// Chart type, such as `barchart`
    pub chart: String,

    pub legend: LegendPosition,

    /// Y-axis scaling strategy
    pub scale: Scale,

    /// Draw a second Y axis when a chart shows two metrics
    pub dual_scale: bool,

    pub orientation: Orientation,

    /// Viewport used when capturing an image of the rendered page
    pub screenshot: Screenshot,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: "Benchmarks".to_string(),
            theme: "roma".to_string(),
            layout: Layout::default(),
            chart: "barchart".to_string(),
            legend: LegendPosition::default(),
            scale: Scale::default(),
            dual_scale: false,
            orientation: Orientation::default(),
            screenshot: Screenshot::default(),
        }
    }
}

/// Number of charts per row and per column. Zero leaves the dimension unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Layout {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self { horizontal: 2, vertical: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LegendPosition {
    None,
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Scale {
    #[default]
    Auto,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,

    /// Delay before capturing, as a duration string such as `1s` or `500ms`
    pub sleep: String,
}

impl Default for Screenshot {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            sleep: "1s".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: RenderSettings = serde_yaml::from_str("theme: westeros\nlegend: top\n").unwrap();
        assert_eq!(settings.theme, "westeros");
        assert_eq!(settings.legend, LegendPosition::Top);
        assert_eq!(settings.title, "Benchmarks");
        assert_eq!(settings.layout, Layout { horizontal: 2, vertical: 0 });
        assert_eq!(settings.scale, Scale::Auto);
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result: Result<RenderSettings, _> = serde_yaml::from_str("scale: cubic\n");
        let _ = result.unwrap_err();

        let result: Result<RenderSettings, _> = serde_yaml::from_str("legend: middle\n");
        let _ = result.unwrap_err();
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<RenderSettings, _> = serde_yaml::from_str("colour: red\n");
        let _ = result.unwrap_err();
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(LegendPosition::None.to_string(), "none");
        assert_eq!("horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!(Scale::Log.to_string(), "log");
    }
}
