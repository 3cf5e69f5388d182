#[allow(dead_code)]
pub mod match_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use match_builders::{collection, MatchBuilder, ParticipantBuilder, RosterBuilder};
