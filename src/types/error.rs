//! Error types for the coffee machine
//!
//! This module defines all error types that can occur while driving the machine.
//! Errors carry structured reasons so callers can branch on them; the `Display`
//! text is what the console shows to the customer.
//!
//! # Error Categories
//!
//! - **Business-rule rejections**: not enough of a resource, counter overflow
//! - **Input errors**: unknown action or drink, malformed refill quantity
//! - **Session I/O errors**: script file not found, read/write failures, CSV errors

use super::machine_state::Resource;
use thiserror::Error;

/// Main error type for the coffee machine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError {
    /// A purchase needs more of a resource than the machine holds
    ///
    /// The purchase is rejected and the machine state remains unchanged.
    #[error("Sorry, not enough {resource}!")]
    InsufficientResource {
        /// The first short resource in check order (water, milk, beans, cups)
        resource: Resource,
    },

    /// A counter would exceed its maximum value
    ///
    /// The operation is rejected and the machine state remains unchanged.
    #[error("Arithmetic overflow in {operation} for {resource}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Counter that would overflow
        resource: Resource,
    },

    /// A refill quantity is not a non-negative integer
    #[error("Invalid quantity '{input}' for {resource}")]
    InvalidQuantity {
        /// Resource the quantity was meant for
        resource: Resource,
        /// The raw input
        input: String,
    },

    /// The action word matches no command
    #[error("Unknown action '{action}'")]
    UnknownAction {
        /// The raw action word
        action: String,
    },

    /// The buy menu choice matches no drink
    #[error("Unknown drink selection '{choice}'")]
    UnknownSelection {
        /// The raw choice
        choice: String,
    },

    /// Command script not found at the specified path
    ///
    /// This is a fatal error that prevents a replay from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred in a command script
    ///
    /// This is a recoverable error - the malformed row is skipped
    /// and the replay continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for MachineError {
    fn from(error: std::io::Error) -> Self {
        MachineError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for MachineError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        MachineError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl MachineError {
    /// Create an InsufficientResource error
    pub fn insufficient(resource: Resource) -> Self {
        MachineError::InsufficientResource { resource }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, resource: Resource) -> Self {
        MachineError::ArithmeticOverflow {
            operation: operation.to_string(),
            resource,
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(resource: Resource, input: &str) -> Self {
        MachineError::InvalidQuantity {
            resource,
            input: input.to_string(),
        }
    }

    /// Create an UnknownAction error
    pub fn unknown_action(action: &str) -> Self {
        MachineError::UnknownAction {
            action: action.to_string(),
        }
    }

    /// Create an UnknownSelection error
    pub fn unknown_selection(choice: &str) -> Self {
        MachineError::UnknownSelection {
            choice: choice.to_string(),
        }
    }

    /// Create a ParseError error for a given script line
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        MachineError::ParseError {
            line,
            message: message.into(),
        }
    }
}
