use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom result type for doctor operations
pub type DoctorResult<T> = Result<T, DoctorError>;

/// Custom error type for doctor operations
#[derive(Debug, Error)]
pub enum DoctorError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Interpreter error: {0}")]
    Interpreter(String),

    #[error("Library error: {0}")]
    Library(String),

    #[error("Header error: {0}")]
    Header(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed: {0} - {1}")]
    CommandFailed(String, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}

impl DoctorError {
    /// Create a new interpreter error
    pub fn interpreter<S: Into<String>>(msg: S) -> Self {
        DoctorError::Interpreter(msg.into())
    }

    /// Create a new library error
    pub fn library<S: Into<String>>(msg: S) -> Self {
        DoctorError::Library(msg.into())
    }

    /// Create a new header error
    pub fn header<S: Into<String>>(msg: S) -> Self {
        DoctorError::Header(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DoctorError::Config(msg.into())
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        DoctorError::ParseError(msg.into())
    }

    /// Create a new command error
    pub fn command_failed<P: Into<String>, S: Into<String>>(program: P, msg: S) -> Self {
        DoctorError::CommandFailed(program.into(), msg.into())
    }
}

impl From<io::Error> for DoctorError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for DoctorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DoctorError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}
