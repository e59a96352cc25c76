//! Option lookup: find a field option by one attribute, report another.

pub mod matcher;
pub mod outcome;

pub use matcher::{resolve, MatchRequest, WILDCARD};
pub use outcome::{MatchOutcome, OutputKey, NO_MATCH};
