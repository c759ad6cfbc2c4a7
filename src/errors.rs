//! Error types for input handling, runs, the BST collaborator and the CLI
//!
//! None of these are retried. Each one is terminal for the action that
//! triggered it and leaves previously loaded state untouched.

use std::fmt;

/// Rejected user input, caught before any driver runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing usable was left after filtering the custom array text
    EmptyArray,

    /// Search target is not a whole number
    InvalidNumber { text: String },

    /// Search target outside the array value range
    TargetOutOfRange { value: i64, min: u32, max: u32 },

    /// BST value outside the accepted range
    ValueOutOfRange { value: i64, min: u32, max: u32 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyArray => {
                write!(f, "Invalid array input: expected comma-separated positive integers")
            }
            InputError::InvalidNumber { text } => {
                write!(f, "'{}' is not a whole number", text)
            }
            InputError::TargetOutOfRange { value, min, max } => {
                write!(f, "Target {} is outside {}..={}", value, min, max)
            }
            InputError::ValueOutOfRange { value, min, max } => {
                write!(f, "Please enter a number between {} and {} (got {})", min, max, value)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Failure to start a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Identifier outside the offered set
    UnknownAlgorithm(String),

    /// Tree operations go through the BST collaborator, not a driver
    NotAnArrayAlgorithm { id: &'static str },

    Input(InputError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::UnknownAlgorithm(id) => write!(f, "Unknown algorithm '{}'", id),
            RunError::NotAnArrayAlgorithm { id } => {
                write!(f, "'{}' runs against the tree, not the array", id)
            }
            RunError::Input(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for RunError {
    fn from(e: InputError) -> Self {
        RunError::Input(e)
    }
}

/// Failure talking to the BST service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BstError {
    InvalidValue(InputError),

    /// The request never produced a response
    Transport(String),

    /// The service answered with a non-success status
    Service { status: u16, message: String },

    /// The response body could not be decoded
    Decode(String),
}

impl fmt::Display for BstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BstError::InvalidValue(e) => write!(f, "{}", e),
            BstError::Transport(message) => write!(f, "Transport error: {}", message),
            BstError::Service { status, message } => {
                write!(f, "Service error (status {}): {}", status, message)
            }
            BstError::Decode(message) => write!(f, "Malformed response: {}", message),
        }
    }
}

impl std::error::Error for BstError {}

impl From<serde_json::Error> for BstError {
    fn from(e: serde_json::Error) -> Self {
        BstError::Decode(e.to_string())
    }
}

/// Bad command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    UnknownAlgorithm(String),
    Input(InputError),
    HelpRequested,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{}' for option '{}'", value, flag)
            }
            ConfigError::UnknownAlgorithm(id) => write!(f, "Unknown algorithm '{}'", id),
            ConfigError::Input(e) => write!(f, "{}", e),
            ConfigError::HelpRequested => write!(f, "Help requested"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<InputError> for ConfigError {
    fn from(e: InputError) -> Self {
        ConfigError::Input(e)
    }
}
