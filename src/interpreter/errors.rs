//! Runtime error types for the expression interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can
//! occur during program execution (as opposed to parse errors).
//!
//! All runtime errors are fatal - they halt execution and display diagnostic
//! information.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone)]
pub enum RuntimeError {
    /// Attempted to read an uninitialized variable
    UninitializedRead {
        var: String,
        location: SourceLocation,
    },

    /// Undefined variable reference
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    /// Undefined function call
    UndefinedFunction {
        name: String,
        location: SourceLocation,
    },

    /// Type error
    TypeError {
        expected: String,
        got: String,
        location: SourceLocation,
    },

    /// Integer overflow in arithmetic operation
    IntegerOverflow {
        operation: String,
        location: SourceLocation,
    },

    /// Division by zero or modulo by zero
    DivisionError {
        operation: String,
        location: SourceLocation,
    },

    /// Invalid printf format string or arguments
    InvalidPrintfFormat {
        message: String,
        location: SourceLocation,
    },

    /// Increment/decrement or assignment applied to something that is not a
    /// variable
    NotAnLvalue { location: SourceLocation },

    /// Main function not found
    NoMainFunction,
}

impl RuntimeError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            RuntimeError::UninitializedRead { location, .. } => Some(location),
            RuntimeError::UndefinedVariable { location, .. } => Some(location),
            RuntimeError::UndefinedFunction { location, .. } => Some(location),
            RuntimeError::TypeError { location, .. } => Some(location),
            RuntimeError::IntegerOverflow { location, .. } => Some(location),
            RuntimeError::DivisionError { location, .. } => Some(location),
            RuntimeError::InvalidPrintfFormat { location, .. } => Some(location),
            RuntimeError::NotAnLvalue { location } => Some(location),
            RuntimeError::NoMainFunction => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UninitializedRead { var, location } => {
                write!(
                    f,
                    "Read from uninitialized variable '{}' at line {}",
                    var, location.line
                )
            }
            RuntimeError::UndefinedVariable { name, location } => {
                write!(f, "Undefined variable '{}' at line {}", name, location.line)
            }
            RuntimeError::UndefinedFunction { name, location } => {
                write!(f, "Undefined function '{}' at line {}", name, location.line)
            }
            RuntimeError::TypeError {
                expected,
                got,
                location,
            } => {
                write!(
                    f,
                    "Type error at line {}: expected {}, got {}",
                    location.line, expected, got
                )
            }
            RuntimeError::IntegerOverflow {
                operation,
                location,
            } => {
                write!(
                    f,
                    "Integer overflow in operation: {} at line {}",
                    operation, location.line
                )
            }
            RuntimeError::DivisionError {
                operation,
                location,
            } => {
                write!(f, "{} at line {}", operation, location.line)
            }
            RuntimeError::InvalidPrintfFormat { message, location } => {
                write!(
                    f,
                    "Invalid printf format at line {}: {}",
                    location.line, message
                )
            }
            RuntimeError::NotAnLvalue { location } => {
                write!(
                    f,
                    "Operand at line {} is not an assignable variable",
                    location.line
                )
            }
            RuntimeError::NoMainFunction => {
                write!(f, "No main() function found")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
