//! Envdoctor environment verification utility.
//!
//! This crate ties together the probe runner and its command-line interface;
//! see `envdoctor-core` for the probe model and `envdoctor-cli` for the
//! commands.

pub use envdoctor_cli as cli;
pub use envdoctor_core as core;

/// Version of the envdoctor system
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
