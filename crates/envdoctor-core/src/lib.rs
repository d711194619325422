//! Core types for the envdoctor environment verification utility.
//!
//! This crate provides the probe model, the standard probe set, and the
//! report renderer used by the envdoctor command-line tool.

pub mod config;
pub mod error;
pub mod header;
pub mod probe;
pub mod process;
pub mod python;
pub mod report;

// Re-export commonly used types
pub use crate::config::{CommandSpec, DoctorConfig, HeaderConfig};
pub use crate::error::{DoctorError, DoctorResult};
pub use crate::probe::{Probe, ProbeResult, ProbeRunner, FAILURE_PREFIX};
pub use crate::python::PythonVersion;
pub use crate::report::{render, render_to_string, summary, ReportSummary};

/// Version of the envdoctor system
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
