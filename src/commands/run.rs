//! Command dispatch logic for benchviz

use super::common::{LogLevel, init_logging};
use super::{
    ChartArgs, GenerateArgs, InitArgs, ReportArgs, ValidateArgs, init_config, process_chart, process_generate, process_report,
    validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "benchviz", author, version, long_about = None)]
#[command(about = "Turn Go benchmark results into chart-ready series")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: BenchvizSubcommand,
}

#[derive(Subcommand, Debug)]
enum BenchvizSubcommand {
    /// Organize benchmark results into chart data
    Chart(Box<ChartArgs>),
    /// Summarize the benchmarks found in some results
    Report(ReportArgs),
    /// Generate a starter ruleset from benchmark results
    Generate(GenerateArgs),
    /// Generate a default ruleset file
    Init(InitArgs),
    /// Validate a ruleset file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.log_level);

    let result = match &cli.command {
        BenchvizSubcommand::Chart(chart_args) => process_chart(host, chart_args),
        BenchvizSubcommand::Report(report_args) => process_report(host, report_args),
        BenchvizSubcommand::Generate(generate_args) => process_generate(host, generate_args),
        BenchvizSubcommand::Init(init_args) => init_config(host, init_args),

        // reports its own failures
        BenchvizSubcommand::Validate(validate_args) => return validate_config(host, validate_args),
    };

    if let Err(e) = &result {
        let _ = writeln!(host.error(), "❌ {e}");
        host.exit(1);
    }

    result
}
