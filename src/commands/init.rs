use super::Host;
use crate::Result;
use crate::rules::RulesetDocument;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output ruleset file path
    #[arg(value_name = "PATH", default_value = "benchviz.yml")]
    pub output: Utf8PathBuf,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    RulesetDocument::save_default_with_comments(&args.output)?;
    let _ = writeln!(host.output(), "Generated default ruleset file: {}", args.output);
    Ok(())
}
