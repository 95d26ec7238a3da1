use super::Host;
use super::common::InputArgs;
use crate::Result;
use crate::input::ParsingReport;
use crate::reports::generate_json_report;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn process_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    let groups = args.input.read()?;
    let report = ParsingReport::new(&groups);

    let mut text = String::new();
    generate_json_report(&report, &mut text)?;
    let _ = writeln!(host.output(), "{text}");
    Ok(())
}
