//! Reshapes classified benchmark records into chart series.
//!
//! Records are classified into `(function, version, context, metric)` observations
//! by the [`RuleStore`](crate::rules::RuleStore), then every configured category is
//! assembled into one series per `(metric, version)` pair, with one point per matching
//! `(function, context)` observation.

mod observation;
mod pipeline;

pub use observation::{ClassifiedObservation, ObservationSet};
pub use pipeline::Organizer;
