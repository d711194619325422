//! Output formatting utilities for CLI

use console::style;
use envdoctor_core::probe::ProbeResult;

/// Format a probe result for display, coloring the name by outcome
pub fn format_result(result: &ProbeResult) -> String {
    let name = if result.succeeded() {
        style(result.name()).green()
    } else {
        style(result.name()).red()
    };
    format!("{}: {}", name, result.output())
}

/// Format an error message
pub fn format_error(msg: &str) -> String {
    style(format!("Error: {}", msg)).red().to_string()
}

/// Format a success message
pub fn format_success(msg: &str) -> String {
    style(msg).green().to_string()
}

/// Format a warning message
pub fn format_warning(msg: &str) -> String {
    style(msg).yellow().to_string()
}

/// Format an info message
pub fn format_info(msg: &str) -> String {
    style(msg).blue().to_string()
}
