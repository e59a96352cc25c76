//! Adapters implementing the port traits.
//!
//! `live` talks to ClickUp, `recording` wraps another adapter and writes a
//! cassette, `replaying` serves a cassette back without network access.

pub mod live;
pub mod recording;
pub mod replaying;
