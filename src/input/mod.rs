//! Benchmark input: raw records grouped by source, the Go benchmark reader and the
//! parsing report.

mod reader;
mod record;
mod report;

pub use reader::{InputFormat, STDIN_NAME, UNKNOWN_ENVIRONMENT, collect_json_output, extract_environment, parse_line, parse_text, read_input, read_inputs};
pub use record::{InputGroup, RawRecord};
pub use report::{MinMaxRange, ParsingReport, Signature};
