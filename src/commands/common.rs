//! Processing shared between commands: logging, ruleset discovery and input arguments.

use crate::Result;
use crate::input::{InputFormat, InputGroup, read_inputs};
use crate::rules::{RuleStore, RulesetDocument};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};

const LOG_TARGET: &str = "  commands";

/// Ruleset file names looked up in the working directory, in order
pub const RULESET_CANDIDATES: [&str; 4] = ["benchviz.yml", "benchviz.yaml", "benchviz.toml", "benchviz.json"];

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Benchmark inputs shared by the commands that read them
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Benchmark output files; `-` or none reads standard input
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<Utf8PathBuf>,

    /// Inputs are `go test -json` event streams
    #[arg(long)]
    pub json: bool,
}

impl InputArgs {
    pub fn read(&self) -> Result<Vec<InputGroup>> {
        let format = if self.json { InputFormat::Json } else { InputFormat::Text };
        read_inputs(&self.inputs, format)
    }
}

pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Load the ruleset given on the command line, else the first candidate file found in
/// `workspace_root`, else the embedded defaults alone.
///
/// Returns the store and the path it was loaded from, if any.
pub fn load_rules(workspace_root: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<(RuleStore, Option<Utf8PathBuf>)> {
    let defaults = RulesetDocument::defaults()?;

    let path = config_path.map(Utf8Path::to_path_buf).or_else(|| {
        RULESET_CANDIDATES
            .iter()
            .map(|name| workspace_root.join(name))
            .find(|path| path.is_file())
    });

    let Some(path) = path else {
        log::debug!(target: LOG_TARGET, "No ruleset file found, using the embedded defaults");
        return Ok((RuleStore::from_document(&defaults)?, None));
    };

    log::info!(target: LOG_TARGET, "Loading ruleset from {path}");
    let store = RuleStore::load(&path, &defaults)?;
    Ok((store, Some(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_no_candidate_uses_defaults() {
        let (_dir, root) = temp_root();
        let (store, path) = load_rules(&root, None).unwrap();
        assert!(path.is_none());
        assert_eq!(store.metrics().len(), 4);
    }

    #[test]
    fn test_candidate_order() {
        let (_dir, root) = temp_root();
        fs::write(root.join("benchviz.json"), r#"{"name": "json"}"#).unwrap();
        fs::write(root.join("benchviz.toml"), "name = \"toml\"\n").unwrap();

        let (store, path) = load_rules(&root, None).unwrap();
        assert_eq!(store.name(), "toml");
        assert_eq!(path.unwrap(), root.join("benchviz.toml"));

        fs::write(root.join("benchviz.yml"), "name: yaml\n").unwrap();
        let (store, _) = load_rules(&root, None).unwrap();
        assert_eq!(store.name(), "yaml");
    }

    #[test]
    fn test_explicit_path_wins() {
        let (_dir, root) = temp_root();
        fs::write(root.join("benchviz.yml"), "name: candidate\n").unwrap();
        let explicit = root.join("custom.yaml");
        fs::write(&explicit, "name: explicit\n").unwrap();

        let (store, path) = load_rules(&root, Some(&explicit)).unwrap();
        assert_eq!(store.name(), "explicit");
        assert_eq!(path.as_deref(), Some(explicit.as_path()));
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let (_dir, root) = temp_root();
        let _ = load_rules(&root, Some(&root.join("nope.yml"))).unwrap_err();
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(LogLevel::Warn);
        init_logging(LogLevel::Debug);
        init_logging(LogLevel::None);
    }
}
