use crate::Result;
use crate::input::ParsingReport;
use crate::model::Scenario;
use crate::rules::RenderSettings;
use core::fmt::Write;
use serde_json::json;

/// Write a scenario and the render settings it should be drawn with.
///
/// Each category also carries its resolved per-metric titles and X-axis labels, so a
/// renderer does not need to know about placeholders.
pub fn generate_scenario<W: Write>(scenario: &Scenario, render: &RenderSettings, writer: &mut W) -> Result<()> {
    let mut categories = Vec::with_capacity(scenario.categories.len());

    for category in &scenario.categories {
        let titles: Vec<_> = category
            .metrics()
            .into_iter()
            .map(|metric| {
                json!({
                    "metric": metric.id,
                    "title": category.title_with_placeholders(metric),
                    "axis_label": metric.axis_label,
                })
            })
            .collect();

        categories.push(json!({
            "id": category.id,
            "title": category.title,
            "environment": category.environment,
            "charts": titles,
            "labels": category.labels(),
            "data": category.data,
        }));
    }

    let output = json!({
        "name": scenario.name,
        "render": render,
        "categories": categories,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

/// Write a parsing report.
pub fn generate_report<W: Write>(report: &ParsingReport, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryData, Point, Series, SeriesKey, VersionRef};
    use crate::rules::{Metric, MetricName};

    fn scenario() -> Scenario {
        let metric = Metric {
            id: MetricName::NsPerOp,
            title: "Timings".to_string(),
            axis_label: "ns/op".to_string(),
        };

        Scenario {
            name: "Demo".to_string(),
            categories: vec![Category {
                id: "cmp".to_string(),
                title: "Compare ({metric})".to_string(),
                environment: "linux amd64".to_string(),
                data: vec![CategoryData {
                    metric,
                    version: VersionRef {
                        id: "v1".to_string(),
                        title: "V1".to_string(),
                    },
                    series: vec![Series {
                        key: SeriesKey::new("", "v1", "", MetricName::NsPerOp),
                        title: "V1".to_string(),
                        points: vec![Point::new(SeriesKey::new("greater", "v1", "int", MetricName::NsPerOp), 2.5)],
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_generate_scenario() {
        let mut output = String::new();
        generate_scenario(&scenario(), &RenderSettings::default(), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "Demo");
        assert_eq!(value["render"]["theme"], "roma");
        assert_eq!(value["render"]["legend"], "bottom");

        let category = &value["categories"][0];
        assert_eq!(category["charts"][0]["title"], "Compare (Timings)");
        assert_eq!(category["labels"][0], "greater - int");
        assert_eq!(category["data"][0]["metric"]["id"], "nsPerOp");
        assert_eq!(category["data"][0]["series"][0]["points"][0]["label"], "greater - v1 - int");
        assert_eq!(category["data"][0]["series"][0]["points"][0]["value"], 2.5);
    }

    #[test]
    fn test_generate_scenario_snapshot() {
        let mut output = String::new();
        let empty = Scenario {
            name: "Empty".to_string(),
            categories: Vec::new(),
        };
        generate_scenario(&empty, &RenderSettings::default(), &mut output).unwrap();

        insta::assert_snapshot!(output, @r#"
        {
          "categories": [],
          "name": "Empty",
          "render": {
            "chart": "barchart",
            "dual_scale": false,
            "layout": {
              "horizontal": 2,
              "vertical": 0
            },
            "legend": "bottom",
            "orientation": "vertical",
            "scale": "auto",
            "screenshot": {
              "height": 1080,
              "sleep": "1s",
              "width": 1920
            },
            "theme": "roma",
            "title": "Benchmarks"
          }
        }
        "#);
    }

    #[test]
    fn test_generate_report() {
        let mut output = String::new();
        generate_report(&ParsingReport::default(), &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sets"], 0);
        assert!(value["benchmark_functions"].as_array().unwrap().is_empty());
    }
}
