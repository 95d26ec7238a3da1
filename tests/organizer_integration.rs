//! End-to-end classification of Go benchmark output through a ruleset.

use benchviz::input::{InputFormat, ParsingReport, read_input};
use benchviz::organizer::Organizer;
use benchviz::rules::{DocumentFormat, MetricName, RuleStore, RulesetDocument, synthesize};
use std::fs;

fn compare_rules() -> RuleStore {
    let defaults = RulesetDocument::defaults().unwrap();
    let text = fs::read_to_string("tests/fixtures/compare.yml").unwrap();
    let doc = RulesetDocument::parse(&text, DocumentFormat::Yaml, "compare.yml", &defaults).unwrap();
    RuleStore::from_document(&doc).unwrap()
}

fn compare_input() -> benchviz::input::InputGroup {
    let file = fs::File::open("tests/fixtures/compare.txt").unwrap();
    read_input(file, "compare.txt", InputFormat::Text).unwrap()
}

#[test]
fn test_versions_become_series() {
    let rules = compare_rules();
    let scenario = Organizer::new(&rules).scenarize(&[compare_input()]).unwrap();

    assert_eq!(scenario.name, "Comparisons");
    assert_eq!(scenario.categories.len(), 1);

    let category = &scenario.categories[0];
    assert_eq!(category.id, "comparisons");
    assert_eq!(category.environment, "linux amd64 cpu: AMD Ryzen 7 5800X 8-Core Processor");
    assert_eq!(category.data.len(), 2);

    let reflect = &category.data[0];
    assert_eq!(reflect.version.id, "reflect");
    assert_eq!(reflect.metric.id, MetricName::NsPerOp);
    assert_eq!(reflect.series.len(), 1);
    assert_eq!(reflect.series[0].title, "Reflect");
    assert_eq!(reflect.series[0].points.len(), 1);

    let point = &reflect.series[0].points[0];
    assert_eq!(point.key.function, "greater");
    assert_eq!(point.key.context, "int");
    assert!((point.value - 245.3).abs() < f64::EPSILON);

    let generics = &category.data[1];
    assert_eq!(generics.version.id, "generics");
    assert_eq!(generics.series[0].points.len(), 1);
    assert!((generics.series[0].points[0].value - 7.89).abs() < f64::EPSILON);
}

#[test]
fn test_excluded_records_are_dropped() {
    let rules = compare_rules();
    let observations = Organizer::new(&rules).classify(&[compare_input()]).unwrap();

    // two records survive, each with three metrics
    assert_eq!(observations.len(), 6);
    assert!(observations.iter().all(|o| o.key.function == "greater"));
    assert!(observations.iter().all(|o| (o.value - 999.0).abs() > f64::EPSILON));
}

#[test]
fn test_strict_rejects_unmatched_records() {
    let rules = compare_rules();
    let err = Organizer::new(&rules).strict(true).scenarize(&[compare_input()]).unwrap_err();
    assert!(err.to_string().contains("BenchmarkGreaterOrEqual/reflect/int-16"), "{err}");
}

#[test]
fn test_environment_override() {
    let rules = compare_rules();
    let scenario = Organizer::new(&rules)
        .environment(Some("ci runner".to_string()))
        .scenarize(&[compare_input()])
        .unwrap();
    assert_eq!(scenario.categories[0].environment, "ci runner");
}

#[test]
fn test_generated_ruleset_round_trip() {
    let group = compare_input();
    let report = ParsingReport::new(std::slice::from_ref(&group));
    let defaults = RulesetDocument::defaults().unwrap();
    let doc = synthesize(&report.functions, &report.metric_names(), &defaults);

    let temp_dir = tempfile::tempdir().unwrap();
    for name in ["generated.yml", "generated.toml", "generated.json"] {
        let path = camino::Utf8PathBuf::from_path_buf(temp_dir.path().join(name)).unwrap();
        doc.save(&path).unwrap();

        let rules = RuleStore::load(&path, &defaults).unwrap();
        assert_eq!(rules.functions().len(), 4, "{name}");
        assert_eq!(rules.metrics().len(), 3, "{name}");

        let scenario = Organizer::new(&rules).strict(true).scenarize(std::slice::from_ref(&group)).unwrap();
        assert_eq!(scenario.categories.len(), 1, "{name}");
        // three records carry three metrics each, one carries only a timing
        assert_eq!(scenario.categories[0].point_count(), 10, "{name}");
    }
}
