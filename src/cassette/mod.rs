//! Cassette format for recording and replaying ClickUp interactions.

pub mod format;
pub mod recorder;
pub mod replayer;
