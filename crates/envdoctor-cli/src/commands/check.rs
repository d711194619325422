use envdoctor_core::{
    config::DoctorConfig,
    error::DoctorResult,
    probe::ProbeRunner,
    report,
};
use tracing::debug;

use crate::output;

/// Execute the check command
pub async fn execute(config: &DoctorConfig) -> DoctorResult<()> {
    let runner = ProbeRunner::from_config(config);
    debug!("Running {} environment probes", runner.len());

    let results = runner.run_all();

    let mut stdout = std::io::stdout();
    report::render(&results, &mut stdout)?;

    let counts = report::summary(&results);
    if counts.failed > 0 {
        println!(
            "{}",
            output::format_warning(&format!(
                "{} of {} probes reported errors",
                counts.failed, counts.total
            ))
        );
    } else {
        println!(
            "{}",
            output::format_success(&format!("all {} probes passed", counts.total))
        );
    }

    // Probe outcomes are informational; they never fail the command
    Ok(())
}
