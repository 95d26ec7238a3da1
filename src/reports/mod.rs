//! Machine-readable output.
//!
//! Rendering charts is left to an external renderer: the scenario is written as JSON
//! together with the render settings of the ruleset. The parsing report uses the same
//! writer conventions.

mod json;

pub use json::{generate_report as generate_json_report, generate_scenario as generate_json};
