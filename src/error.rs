//! Error types for the phone book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use thiserror::Error;

/// Errors produced by command parsing and contact store operations.
///
/// None of these are fatal: the interpreter renders every one of them as a
/// message and the session continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneBookError {
    /// Unknown verb, missing arguments, or arguments in the wrong shape
    #[error("{0}")]
    InvalidCommand(String),

    /// The phone number is already on the contact's record
    #[error("Phone {phone} already exists for {name}")]
    DuplicatePhone {
        name: ContactName,
        phone: PhoneNumber,
    },

    /// The phone number is not on the contact's record
    #[error("Phone {phone} does not exist for {name}")]
    PhoneNotFound {
        name: ContactName,
        phone: PhoneNumber,
    },

    /// No record exists for the name
    #[error("Contact {0} doesn't exist")]
    ContactNotFound(ContactName),
}

impl PhoneBookError {
    /// Generic detail used when a line does not match any accepted shape.
    pub const CHECK_COMMAND: &'static str = "Check your command";

    /// Shorthand for the generic `InvalidCommand` error.
    pub fn check_command() -> Self {
        Self::InvalidCommand(Self::CHECK_COMMAND.to_string())
    }

    /// The name of the error kind, as shown to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCommand(_) => "InvalidCommand",
            Self::DuplicatePhone { .. } => "DuplicatePhone",
            Self::PhoneNotFound { .. } => "PhoneNotFound",
            Self::ContactNotFound(_) => "ContactNotFound",
        }
    }
}

impl From<ValidationError> for PhoneBookError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidCommand(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PhoneBookError
pub type PhoneBookResult<T> = Result<T, PhoneBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
