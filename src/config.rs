//! Configuration loader and schema types.
//!
//! This module exposes the `[queue]` settings that pick the queue's shuffle
//! and skip behavior, and helpers to load them from disk or environment.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
