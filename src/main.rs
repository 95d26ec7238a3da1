//! Turn Go benchmark results into chart-ready series.
//!
//! # Quick Start
//!
//! Write a commented starter ruleset, or synthesize one from existing results:
//!
//! ```bash
//! benchviz init benchviz.yml
//! go test -bench . ./... > bench.txt
//! benchviz generate bench.txt -o benchviz.yml
//! ```
//!
//! Edit the ruleset to group benchmarks into functions, versions and contexts, check
//! it, then produce the chart data:
//!
//! ```bash
//! benchviz validate
//! benchviz chart bench.txt -o charts.json
//! ```
//!
//! Results can also be piped, including `go test -json` streams:
//!
//! ```bash
//! go test -json -bench . ./... | benchviz chart --json
//! ```
//!
//! Use `benchviz report` to see which benchmarks and metrics an input holds, and
//! `--log-level info` to follow what gets classified where.

use benchviz::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that runs real OS commands.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
