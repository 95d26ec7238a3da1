use super::Host;
use super::common::InputArgs;
use crate::Result;
use crate::input::ParsingReport;
use crate::rules::{DocumentFormat, RuleStore, RulesetDocument, synthesize};
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the ruleset to this file, in the format given by its extension, instead of
    /// printing YAML to standard output
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

pub fn process_generate<H: Host>(host: &mut H, args: &GenerateArgs) -> Result<()> {
    let groups = args.input.read()?;
    let report = ParsingReport::new(&groups);

    let defaults = RulesetDocument::defaults()?;
    let doc = synthesize(&report.functions, &report.metric_names(), &defaults);

    // refuse to write a ruleset that would not load back
    let _ = RuleStore::from_document(&doc)?;

    if let Some(path) = &args.output {
        doc.save(path)?;
        let _ = writeln!(
            host.output(),
            "Generated ruleset with {} functions: {path}",
            doc.functions.len()
        );
    } else {
        let text = DocumentFormat::Yaml.serialize(&doc, "standard output")?;
        let _ = write!(host.output(), "{text}");
    }

    Ok(())
}
