use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DoctorConfig;
use crate::error::DoctorResult;
use crate::{header, process, python};

/// Prefix attached to the output of failed probes
pub const FAILURE_PREFIX: &str = "[ERR]";

type ProbeAction = Box<dyn Fn() -> DoctorResult<String> + Send + Sync>;

/// A named, single-shot environment check.
///
/// A probe has no inputs besides the ambient environment; its action either
/// produces a textual result or fails with a reason.
pub struct Probe {
    name: String,
    action: ProbeAction,
}

impl Probe {
    /// Create a new probe
    pub fn new(
        name: impl Into<String>,
        action: impl Fn() -> DoctorResult<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// Get the probe name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the probe inside its isolating boundary.
    ///
    /// Any failure is converted into a failed result carrying the reason;
    /// nothing propagates to the caller.
    pub fn run(&self) -> ProbeResult {
        debug!("Running probe: {}", self.name);
        match (self.action)() {
            Ok(output) => ProbeResult::success(&self.name, output),
            Err(e) => ProbeResult::failure(&self.name, e.to_string()),
        }
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe").field("name", &self.name).finish()
    }
}

/// Outcome of a single probe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    name: String,
    succeeded: bool,
    output: String,
}

impl ProbeResult {
    /// Create a successful result
    pub fn success(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            succeeded: true,
            output: output.into(),
        }
    }

    /// Create a failed result; the reason is kept printable
    pub fn failure(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            succeeded: false,
            output: format!("{} {}", FAILURE_PREFIX, reason.into()),
        }
    }

    /// Get the probe name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the probe succeeded
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// The probe's textual result or failure message
    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Runs an ordered sequence of independent probes
#[derive(Debug, Default)]
pub struct ProbeRunner {
    probes: Vec<Probe>,
}

impl ProbeRunner {
    /// Create a new empty runner
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Build a runner with the standard probe set, wired from configuration.
    ///
    /// Registration order matches the report order: interpreter, accelerator
    /// library, compiler, driver, header.
    pub fn from_config(config: &DoctorConfig) -> Self {
        let mut runner = Self::new();

        let interpreter = config.interpreter.clone();
        let minimum = config.minimum_python.clone();
        runner.register(Probe::new("Python", move || {
            python::interpreter_version(&interpreter, minimum.as_ref())
        }));

        let name = config.library.clone();
        let interpreter = config.interpreter.clone();
        let library = config.library.clone();
        runner.register(Probe::new(name, move || {
            python::library_status(&interpreter, &library)
        }));

        let compiler = config.compiler.clone();
        runner.register(Probe::new(compiler.program.clone(), move || {
            process::run_lenient(&compiler.program, &compiler.args)
        }));

        let driver = config.driver.clone();
        runner.register(Probe::new(driver.program.clone(), move || {
            process::run_lenient(&driver.program, &driver.args)
        }));

        let header = config.header.clone();
        runner.register(Probe::new("header", move || {
            header::directive_status(&header.path, &header.directive, header.scan_lines)
        }));

        runner
    }

    /// Register a probe at the end of the run order
    pub fn register(&mut self, probe: Probe) {
        self.probes.push(probe);
    }

    /// Get the registered probes in run order
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Number of registered probes
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether no probes are registered
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Run every probe in registration order.
    ///
    /// One probe's failure never prevents the others from running; the
    /// returned results match the registration order one-to-one.
    pub fn run_all(&self) -> Vec<ProbeResult> {
        self.probes.iter().map(Probe::run).collect()
    }
}
