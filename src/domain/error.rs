use std::fmt;
use std::io;

use thiserror::Error;

use crate::domain::session::OperationState;

/// Library-wide error type for promptopt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Local precondition failure; never reaches the network.
    #[error("{0}")]
    EmptyInput(String),

    /// The remote call succeeded but the payload did not match the result contract.
    #[error("{0}")]
    MalformedResponse(String),

    /// Transport-level or remote-side failure.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' not set")]
    EnvironmentVariableMissing(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Another operation is still in flight for this session.
    #[error("Cannot start a new request while {0}")]
    OperationInProgress(OperationState),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive input failed or was rejected.
    #[error("{0}")]
    Validation(String),

    /// Internal invariant violated.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Coarse classification of [`AppError`] used by callers deciding how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    MalformedResponse,
    ServiceUnavailable,
    Configuration,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Other => "other",
        };
        f.write_str(label)
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::EmptyInput(_) => ErrorKind::EmptyInput,
            AppError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            AppError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            AppError::Configuration(_)
            | AppError::EnvironmentVariableMissing(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_) => ErrorKind::Configuration,
            AppError::Io(_)
            | AppError::OperationInProgress(_)
            | AppError::ClipboardError(_)
            | AppError::Validation(_)
            | AppError::InternalError(_) => ErrorKind::Other,
        }
    }
}
