//! Core library for benchviz
//!
//! benchviz reshapes Go micro-benchmark results into chart-ready series, under a
//! declarative ruleset that says which benchmark names belong to which function,
//! version and context, and which of them are drawn together.
//!
//! # Module Organization
//!
//! - [`rules`]: the ruleset document, its validated [`RuleStore`](rules::RuleStore),
//!   name classification and ruleset synthesis
//! - [`input`]: benchmark records, the Go benchmark reader and the parsing report
//! - [`organizer`]: classification of records and assembly of categories
//! - [`model`]: the [`Scenario`](model::Scenario) handed to renderers
//! - [`reports`]: JSON output
//!
//! # Example
//!
//! ```
//! use benchviz::input::{InputFormat, read_input};
//! use benchviz::organizer::Organizer;
//! use benchviz::rules::{DocumentFormat, RuleStore, RulesetDocument};
//!
//! let ruleset = "
//! functions:
//!   - id: greater
//!     match: Greater
//! categories:
//!   - id: comparisons
//!     includes:
//!       metrics: [nsPerOp]
//! ";
//!
//! let defaults = RulesetDocument::defaults()?;
//! let doc = RulesetDocument::parse(ruleset, DocumentFormat::Yaml, "example", &defaults)?;
//! let rules = RuleStore::from_document(&doc)?;
//!
//! let output = "BenchmarkGreater-8 1000 12.5 ns/op\n";
//! let group = read_input(output.as_bytes(), "bench.txt", InputFormat::Text)?;
//!
//! let scenario = Organizer::new(&rules).scenarize(&[group])?;
//! assert_eq!(scenario.categories[0].data[0].series[0].points[0].value, 12.5);
//! # Ok::<(), ohno::AppError>(())
//! ```

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

mod commands;

pub mod input;
pub mod model;
pub mod organizer;
pub mod reports;
pub mod rules;

pub use crate::commands::{Host, run};
