//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised while executing a single command.
///
/// None of these end the session: the dispatcher turns them into a reply and
/// the loop prompts again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone, date or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrong number of arguments for the command
    #[error("Usage: {usage}")]
    Arguments { usage: &'static str },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
