//! Reads `go test -bench` output, as plain text or as `go test -json` events.

use crate::Result;
use crate::input::{InputGroup, RawRecord};
use crate::rules::MetricName;
use camino::Utf8PathBuf;
use ohno::IntoAppError;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

const LOG_TARGET: &str = "     input";

/// Name standing for standard input in the list of inputs
pub const STDIN_NAME: &str = "-";

/// Environment reported when the output carries no `goos`, `goarch` or `cpu` line
pub const UNKNOWN_ENVIRONMENT: &str = "unknown environment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Plain `go test -bench` output
    #[default]
    Text,

    /// The event stream of `go test -json -bench`
    Json,
}

/// A `go test -json` event; only output events matter here.
#[derive(Debug, Deserialize)]
struct TestEvent {
    #[serde(rename = "Action", default)]
    action: String,

    #[serde(rename = "Output", default)]
    output: String,
}

/// Read every input, in order. An empty list or `-` reads standard input.
///
/// # Errors
///
/// Returns an error if an input cannot be read.
pub fn read_inputs(paths: &[Utf8PathBuf], format: InputFormat) -> Result<Vec<InputGroup>> {
    if paths.is_empty() {
        return Ok(vec![read_input(io::stdin().lock(), STDIN_NAME, format)?]);
    }

    let groups = paths
        .iter()
        .map(|path| {
            if path.as_str() == STDIN_NAME {
                read_input(io::stdin().lock(), STDIN_NAME, format)
            } else {
                let file = fs::File::open(path).into_app_err_with(|| format!("opening input file {path}"))?;
                read_input(file, path.as_str(), format)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!(target: LOG_TARGET, "Parsed {} benchmark input(s)", groups.len());
    Ok(groups)
}

/// Read one input into an [`InputGroup`] named after `source`.
///
/// # Errors
///
/// Returns an error if the reader fails or does not yield UTF-8 text.
pub fn read_input<R: Read>(mut reader: R, source: &str, format: InputFormat) -> Result<InputGroup> {
    let mut content = String::new();
    let _ = reader
        .read_to_string(&mut content)
        .into_app_err_with(|| format!("reading benchmark input {source}"))?;

    let text = match format {
        InputFormat::Text => content,
        InputFormat::Json => collect_json_output(&content),
    };

    let group = InputGroup {
        source_file: source.to_string(),
        environment: extract_environment(&text),
        records: parse_text(&text),
    };

    log::debug!(target: LOG_TARGET, "Read {} records from {source}", group.records.len());
    Ok(group)
}

/// Concatenate the output of every `output` event of a `go test -json` stream.
///
/// Lines that are not JSON events are skipped.
#[must_use]
pub fn collect_json_output(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str::<TestEvent>(line) {
            Ok(event) => Some(event),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Skipping line that is not a test event: {e}");
                None
            }
        })
        .filter(|event| event.action == "output")
        .map(|event| event.output)
        .collect()
}

/// Parse the benchmark lines of `go test -bench` output, ignoring everything else.
#[must_use]
pub fn parse_text(text: &str) -> Vec<RawRecord> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse one `BenchmarkName-P  N  value unit [value unit ...]` line.
///
/// Units other than the four known metrics are ignored, as are values that do not parse.
#[must_use]
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (&name, rest) = fields.split_first()?;
    if !name.starts_with("Benchmark") {
        return None;
    }

    let (&iterations, measurements) = rest.split_first()?;
    let mut record = RawRecord::new(name, iterations.parse().ok()?);

    for pair in measurements.chunks_exact(2) {
        let (value, unit) = (pair[0], pair[1]);
        match MetricName::from_unit(unit) {
            Some(MetricName::NsPerOp) => record.ns_per_op = value.parse().ok(),
            Some(MetricName::AllocsPerOp) => record.allocs_per_op = value.parse().ok(),
            Some(MetricName::BytesPerOp) => record.bytes_per_op = value.parse().ok(),
            Some(MetricName::MBytesPerS) => record.mb_per_s = value.parse().ok(),
            None => {}
        }
    }

    Some(record)
}

/// Build an environment label from the `goos`, `goarch` and `cpu` header lines.
#[must_use]
pub fn extract_environment(text: &str) -> String {
    let parts: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            if let Some(goos) = line.strip_prefix("goos: ") {
                Some(goos.to_string())
            } else if let Some(goarch) = line.strip_prefix("goarch: ") {
                Some(goarch.to_string())
            } else {
                line.strip_prefix("cpu: ").map(|cpu| format!("cpu: {}", cpu.trim()))
            }
        })
        .collect();

    if parts.is_empty() {
        UNKNOWN_ENVIRONMENT.to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "\
goos: linux
goarch: amd64
pkg: github.com/example/compare
cpu: AMD Ryzen 7 5800X 8-Core Processor  
BenchmarkGreater/reflect/int-16         	12345678	        95.40 ns/op	      16 B/op	       1 allocs/op
BenchmarkGreaterOrEqual/reflect/int-16  	10000000	       101.2 ns/op
BenchmarkCopy-16                        	  500000	      2400 ns/op	 426.67 MB/s	  3 widgets/op
PASS
ok  	github.com/example/compare	3.210s
";

    #[test]
    fn test_parse_text() {
        let records = parse_text(OUTPUT);
        assert_eq!(records.len(), 3);

        let greater = &records[0];
        assert_eq!(greater.name, "BenchmarkGreater/reflect/int-16");
        assert_eq!(greater.iterations, 12_345_678);
        assert_eq!(greater.ns_per_op, Some(95.40));
        assert_eq!(greater.bytes_per_op, Some(16));
        assert_eq!(greater.allocs_per_op, Some(1));
        assert_eq!(greater.mb_per_s, None);

        let copy = &records[2];
        assert_eq!(copy.mb_per_s, Some(426.67));
        assert_eq!(copy.allocs_per_op, None);
    }

    #[test]
    fn test_parse_line_rejects_non_benchmarks() {
        assert_eq!(parse_line("PASS"), None);
        assert_eq!(parse_line("BenchmarkNoIterations"), None);
        assert_eq!(parse_line("BenchmarkBadIterations many 1 ns/op"), None);
        assert_eq!(parse_line("TestSomething 1 1 ns/op"), None);
        assert_eq!(parse_line(""), None);

        let bare = parse_line("BenchmarkBare 10").unwrap();
        assert_eq!(bare.iterations, 10);
        assert_eq!(bare.ns_per_op, None);
    }

    #[test]
    fn test_extract_environment() {
        assert_eq!(extract_environment(OUTPUT), "linux amd64 cpu: AMD Ryzen 7 5800X 8-Core Processor");
        assert_eq!(extract_environment("BenchmarkX 1 1 ns/op\n"), UNKNOWN_ENVIRONMENT);
    }

    #[test]
    fn test_json_stream() {
        let stream = r#"{"Time":"2024-01-01T00:00:00Z","Action":"start","Package":"p"}
{"Action":"output","Package":"p","Output":"goos: darwin\n"}
{"Action":"output","Package":"p","Output":"goarch: arm64\n"}
not json at all
{"Action":"output","Package":"p","Test":"BenchmarkLess","Output":"BenchmarkLess-8 \t 2000 \t 12.0 ns/op\n"}
{"Action":"pass","Package":"p","Elapsed":1.5}
"#;

        let group = read_input(stream.as_bytes(), "bench.json", InputFormat::Json).unwrap();
        assert_eq!(group.source_file, "bench.json");
        assert_eq!(group.environment, "darwin arm64");
        assert_eq!(group.records.len(), 1);
        assert_eq!(group.records[0].name, "BenchmarkLess-8");
        assert_eq!(group.records[0].ns_per_op, Some(12.0));
    }

    #[test]
    fn test_read_inputs_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = Utf8PathBuf::from_path_buf(dir.path().join("first.txt")).unwrap();
        let second = Utf8PathBuf::from_path_buf(dir.path().join("second.txt")).unwrap();
        fs::write(&first, OUTPUT).unwrap();
        fs::write(&second, "BenchmarkOther-2 10 5 ns/op\n").unwrap();

        let groups = read_inputs(&[first.clone(), second], InputFormat::Text).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].source_file, first.as_str());
        assert_eq!(groups[0].records.len(), 3);
        assert_eq!(groups[1].environment, UNKNOWN_ENVIRONMENT);
    }

    #[test]
    fn test_missing_input_file() {
        let err = read_inputs(&[Utf8PathBuf::from("/definitely/not/here.txt")], InputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"), "{err}");
    }
}
