use super::Host;
use super::common::{InputArgs, load_rules};
use crate::Result;
use crate::organizer::Organizer;
use crate::reports::generate_json;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path to the ruleset file [default: one of benchviz.[yml|yaml|toml|json]]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Environment shown on every chart, overriding the detected one
    #[arg(long, short = 'e', value_name = "ENV")]
    pub environment: Option<String>,

    /// Fail on benchmarks or categories that cannot be resolved
    #[arg(long)]
    pub strict: bool,

    /// Write the chart data to this file instead of standard output
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

pub fn process_chart<H: Host>(host: &mut H, args: &ChartArgs) -> Result<()> {
    let (rules, _) = load_rules(Utf8Path::new("."), args.config.as_deref())?;
    let groups = args.input.read()?;

    let scenario = Organizer::new(&rules)
        .strict(args.strict)
        .environment(args.environment.clone())
        .scenarize(&groups)?;

    let mut text = String::new();
    generate_json(&scenario, rules.render(), &mut text)?;

    if let Some(path) = &args.output {
        fs::write(path, text).into_app_err_with(|| format!("writing chart data to {path}"))?;
        let _ = writeln!(host.output(), "Wrote {} charts to {path}", scenario.categories.len());
    } else {
        let _ = writeln!(host.output(), "{text}");
    }

    Ok(())
}
