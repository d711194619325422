use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{DoctorError, DoctorResult};
use crate::python::PythonVersion;

/// Configuration for an environment check run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Interpreter invoked for the version and library probes
    pub interpreter: String,
    /// Minimum interpreter version accepted by the version probe
    pub minimum_python: Option<PythonVersion>,
    /// Accelerator library imported through the interpreter
    pub library: String,
    /// Compiler toolchain version query
    pub compiler: CommandSpec,
    /// Accelerator driver status query
    pub driver: CommandSpec,
    /// Header inspection settings
    pub header: HeaderConfig,
}

/// An external executable with its argument list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Executable name, resolved through PATH
    pub program: String,
    /// Arguments passed verbatim, never through a shell
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command specification
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Settings for the header directive probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Relative path of the header to inspect
    pub path: PathBuf,
    /// Include directive expected within the scanned prefix
    pub directive: String,
    /// Number of leading lines scanned
    pub scan_lines: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(
                "gaussian_splatting/submodules/diff-gaussian-rasterization/cuda_rasterizer/rasterizer_impl.h",
            ),
            directive: "#include <cstdint>".to_string(),
            scan_lines: 10,
        }
    }
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            minimum_python: None,
            library: "torch".to_string(),
            compiler: CommandSpec::new("nvcc", &["--version"]),
            driver: CommandSpec::new("nvidia-smi", &[]),
            header: HeaderConfig::default(),
        }
    }
}

impl DoctorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DoctorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> DoctorResult<()> {
        if self.interpreter.is_empty() {
            return Err(DoctorError::config("Interpreter name must not be empty"));
        }

        if self.library.is_empty() {
            return Err(DoctorError::config("Library name must not be empty"));
        }

        if self.header.scan_lines == 0 {
            return Err(DoctorError::config(
                "Header scan window must cover at least one line",
            ));
        }

        Ok(())
    }

    /// Convert config to TOML string
    pub fn to_toml(&self) -> DoctorResult<String> {
        toml::to_string(self)
            .map_err(|e| DoctorError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Create config from TOML string
    pub fn from_toml(content: &str) -> DoctorResult<Self> {
        toml::from_str(content)
            .map_err(|e| DoctorError::Config(format!("Failed to parse config: {}", e)))
    }
}
