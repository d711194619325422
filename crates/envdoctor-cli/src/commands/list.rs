use envdoctor_core::{config::DoctorConfig, error::DoctorResult, probe::ProbeRunner};
use tracing::debug;

use crate::output;

/// Execute the list command
pub async fn execute(config: &DoctorConfig) -> DoctorResult<()> {
    let runner = ProbeRunner::from_config(config);
    debug!("{} probes registered", runner.len());

    for probe in runner.probes() {
        println!("{}", output::format_info(probe.name()));
    }

    Ok(())
}
