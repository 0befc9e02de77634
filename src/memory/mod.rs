//! Memory model for the expression interpreter
//!
//! - [`value`]: tagged runtime values (Int, Bool, Uninitialized)
//! - [`scope`]: the flat scope of typed variable slots
//!
//! # Two-state storage
//!
//! A `bool` slot can only ever hold `false` or `true`. Every store into a
//! `bool` slot passes through the C truthiness conversion, so no sequence of
//! assignments or increment/decrement operations can leave it in a third
//! state. This is the storage-level invariant the increment/decrement
//! demonstration relies on.

pub mod scope;
pub mod value;
