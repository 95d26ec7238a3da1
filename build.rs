//! This build script validates the default ruleset (`default_config.yml`) embedded in the binary

#![allow(
    clippy::redundant_pub_crate,
    reason = "pub(crate) is correct in library context but appears redundant in build script"
)]
#![allow(dead_code, reason = "Some items may be unused in this build script context")]
#![allow(unused_imports, reason = "Some items may be unused in this build script context")]

use std::process;

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[path = "src/rules/mod.rs"]
mod rules;

fn main() {
    match inner_main() {
        Ok(()) => {
            println!("cargo:rerun-if-changed=default_config.yml");
            println!("cargo:rerun-if-changed=src/rules");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("unable to load default_config.yml: {e:?}");
            process::exit(1);
        }
    }
}

fn inner_main() -> Result<()> {
    let defaults = rules::RulesetDocument::defaults()?;
    let store = rules::RuleStore::from_document(&defaults)?;

    if store.metrics().is_empty() {
        eprintln!("cargo:warning=default_config.yml declares no metrics");
        process::exit(1);
    }

    Ok(())
}
