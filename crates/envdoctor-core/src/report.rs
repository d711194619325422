use std::io::{self, Write};

use crate::probe::ProbeResult;

/// Counts over a finished probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Total number of probes run
    pub total: usize,
    /// Probes that produced a result
    pub succeeded: usize,
    /// Probes that failed with a reason
    pub failed: usize,
}

/// Render one line per probe result, in order.
///
/// Rendering is a pure function of the results and is idempotent.
pub fn render<W: Write>(results: &[ProbeResult], out: &mut W) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}: {}", result.name(), result.output())?;
    }
    Ok(())
}

/// Render results into a string
pub fn render_to_string(results: &[ProbeResult]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    render(results, &mut buffer).expect("in-memory render");
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Summarize a finished run
pub fn summary(results: &[ProbeResult]) -> ReportSummary {
    let succeeded = results.iter().filter(|r| r.succeeded()).count();
    ReportSummary {
        total: results.len(),
        succeeded,
        failed: results.len() - succeeded,
    }
}
