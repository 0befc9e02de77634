//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents all runtime values
//! in the interpreter. Unlike C's raw memory model, values are tagged and
//! type-safe: a `_Bool` is a real two-state variant, not a byte that happens
//! to hold 0 or 1.
//!
//! # Initialization Tracking
//!
//! The `Uninitialized` variant enables detection of reads from uninitialized
//! variables, a common source of undefined behavior in C.

/// Runtime values in the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Value {
    Int(i32),
    Bool(bool),
    #[default]
    Uninitialized, // Special marker for uninitialized variables
}

impl Value {
    /// Check if this value is initialized
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Value::Uninitialized)
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the bool value, returns None if not a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as a C integer: `true` is 1, `false` is 0.
    ///
    /// This is the usual-arithmetic-conversions view that `%d`, comparisons,
    /// and arithmetic all share.
    pub fn as_arith_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i32::from(*b)),
            Value::Uninitialized => None,
        }
    }

    /// The value under C truthiness: nonzero is true.
    pub fn is_truthy(&self) -> Option<bool> {
        match self {
            Value::Int(n) => Some(*n != 0),
            Value::Bool(b) => Some(*b),
            Value::Uninitialized => None,
        }
    }
}
