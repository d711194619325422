use std::cmp::Ordering;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DoctorError, DoctorResult};
use crate::process;

/// Python version specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonVersion {
    major: u8,
    minor: u8,
    patch: Option<u8>,
}

impl PythonVersion {
    /// Create a new Python version
    pub fn new(major: u8, minor: u8, patch: Option<u8>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Get the major version
    pub fn major(&self) -> u8 {
        self.major
    }

    /// Get the minor version
    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// Get the patch version
    pub fn patch(&self) -> Option<u8> {
        self.patch
    }

    pub fn parse(version: &str) -> DoctorResult<Self> {
        Self::from_str(version)
    }
}

impl FromStr for PythonVersion {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.len() {
            2 => Ok(Self::new(
                parts[0].parse().map_err(|_| DoctorError::parse("Invalid major version"))?,
                parts[1].parse().map_err(|_| DoctorError::parse("Invalid minor version"))?,
                None,
            )),
            3 => Ok(Self::new(
                parts[0].parse().map_err(|_| DoctorError::parse("Invalid major version"))?,
                parts[1].parse().map_err(|_| DoctorError::parse("Invalid minor version"))?,
                Some(parts[2].parse().map_err(|_| DoctorError::parse("Invalid patch version"))?),
            )),
            _ => Err(DoctorError::parse("Invalid Python version format")),
        }
    }
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl PartialOrd for PythonVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PythonVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => match self.minor.cmp(&other.minor) {
                Ordering::Equal => match (self.patch, other.patch) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (Some(a), Some(b)) => a.cmp(&b),
                },
                ord => ord,
            },
            ord => ord,
        }
    }
}

/// Query the configured interpreter for its version banner.
///
/// The banner is reported verbatim; when `minimum` is set it must parse and
/// compare at or above that version.
pub fn interpreter_version(
    interpreter: &str,
    minimum: Option<&PythonVersion>,
) -> DoctorResult<String> {
    let banner = process::run_checked(interpreter, &["--version".to_string()])?;
    check_banner(&banner, minimum)
}

/// Validate a `Python X.Y.Z` banner against an optional minimum version
pub fn check_banner(banner: &str, minimum: Option<&PythonVersion>) -> DoctorResult<String> {
    let banner = banner.trim();
    if banner.is_empty() {
        return Err(DoctorError::interpreter("Interpreter produced no version banner"));
    }

    if let Some(minimum) = minimum {
        let token = banner
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| DoctorError::interpreter(format!("Unrecognized version banner: {}", banner)))?;
        let version = PythonVersion::parse(token)?;
        if version < *minimum {
            return Err(DoctorError::interpreter(format!(
                "Interpreter {} is older than required {}",
                version, minimum
            )));
        }
    }

    Ok(banner.to_string())
}

/// Query the interpreter for an accelerator library's version and availability.
///
/// Imports the library inside the interpreter and prints its version, the
/// toolkit version it was built against, and its availability flag. Any raised
/// failure surfaces as the probe's error text.
pub fn library_status(interpreter: &str, library: &str) -> DoctorResult<String> {
    if library.is_empty() || !library.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DoctorError::library(format!("Invalid library name: {}", library)));
    }

    let snippet = library_snippet(library);
    let raw = process::run_checked(interpreter, &["-c".to_string(), snippet])?;
    parse_library_report(&raw)
}

fn library_snippet(library: &str) -> String {
    format!(
        "import {m}\nprint({m}.__version__)\nprint({m}.version.cuda)\nprint({m}.cuda.is_available())",
        m = library
    )
}

fn parse_library_report(raw: &str) -> DoctorResult<String> {
    let mut lines = raw.lines().map(str::trim);

    let version = lines
        .next()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| DoctorError::library("Library reported no version"))?;
    let toolkit = lines.next().unwrap_or("None");
    let available = lines
        .next()
        .map(|l| l.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    Ok(format!(
        "{} | cuda toolkit: {} | accelerator available: {}",
        version, toolkit, available
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_version_parsing() {
        assert!(PythonVersion::parse("3.8").is_ok());
        assert!(PythonVersion::parse("3.8.0").is_ok());
        assert!(PythonVersion::parse("3").is_err());
        assert!(PythonVersion::parse("invalid").is_err());
    }

    #[test]
    fn test_python_version_ordering() {
        let v38 = PythonVersion::parse("3.8").unwrap();
        let v39 = PythonVersion::parse("3.9").unwrap();
        let v380 = PythonVersion::parse("3.8.0").unwrap();
        let v27 = PythonVersion::parse("2.7").unwrap();

        assert!(v38 < v39);
        assert!(v27 < v38);
        assert!(v38 < v380);
        assert_eq!(v38.to_string(), "3.8");
        assert_eq!(v380.to_string(), "3.8.0");
    }

    #[test]
    fn test_check_banner_without_minimum() {
        let banner = check_banner("Python 3.10.12\n", None).unwrap();
        assert_eq!(banner, "Python 3.10.12");

        // Unparseable banners pass through untouched when no minimum is set
        let odd = check_banner("PyPy 7.3 weird build", None).unwrap();
        assert_eq!(odd, "PyPy 7.3 weird build");

        assert!(check_banner("   ", None).is_err());
    }

    #[test]
    fn test_check_banner_with_minimum() {
        let minimum = PythonVersion::parse("3.8").unwrap();

        assert!(check_banner("Python 3.10.12", Some(&minimum)).is_ok());

        let err = check_banner("Python 3.7.3", Some(&minimum)).unwrap_err();
        assert!(err.to_string().contains("older than required"));

        assert!(check_banner("Python", Some(&minimum)).is_err());
    }

    #[test]
    fn test_library_name_validation() {
        assert!(library_status("python3", "bad name").is_err());
        assert!(library_status("python3", "os;import sys").is_err());
        assert!(library_status("python3", "").is_err());
    }

    #[test]
    fn test_parse_library_report() {
        let report = parse_library_report("2.4.0\n12.1\nTrue\n").unwrap();
        assert_eq!(report, "2.4.0 | cuda toolkit: 12.1 | accelerator available: true");

        let cpu_only = parse_library_report("2.4.0\nNone\nFalse\n").unwrap();
        assert_eq!(cpu_only, "2.4.0 | cuda toolkit: None | accelerator available: false");

        assert!(parse_library_report("").is_err());
    }
}
