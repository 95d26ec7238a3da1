use super::Host;
use super::common::load_rules;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the ruleset file [default: one of benchviz.[yml|yaml|toml|json]]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    match load_rules(Utf8Path::new("."), args.config.as_deref()) {
        Ok((rules, path)) => {
            let _ = writeln!(host.output(), "Ruleset is valid");
            if let Some(path) = path {
                let _ = writeln!(host.output(), "Ruleset file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default ruleset (no ruleset file found)");
            }

            let _ = writeln!(
                host.output(),
                "{} functions, {} versions, {} contexts, {} metrics, {} categories, {} file rules",
                rules.functions().len(),
                rules.versions().len(),
                rules.contexts().len(),
                rules.metrics().len(),
                rules.categories().len(),
                rules.files().len()
            );
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Ruleset validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
