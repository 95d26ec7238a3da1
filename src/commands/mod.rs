//! Command-line interface for benchviz
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler:
//!
//! - **chart**: read benchmark results, organize them under a ruleset and write the
//!   chart data as JSON
//! - **report**: summarize the benchmarks, metrics and environments found in some results
//! - **generate**: synthesize a starter ruleset from benchmark results
//! - **init**: write the commented default ruleset
//! - **validate**: load a ruleset and report whether it is valid
//!
//! All output goes through a [`Host`], so commands can be exercised without touching
//! the real standard streams or exiting the process.

mod chart;
mod common;
mod generate;
mod host;
mod init;
mod report;
mod run;
mod validate;

pub use chart::{ChartArgs, process_chart};
pub use generate::{GenerateArgs, process_generate};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use report::{ReportArgs, process_report};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
