//! Live adapters for real external interactions.

pub mod clickup;

pub use clickup::LiveClickUpClient;
