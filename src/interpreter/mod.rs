//! Execution engine for the parsed program
//!
//! - [`engine`]: tree-walking interpreter over the AST
//! - [`errors`]: runtime error types
//! - [`console`]: recorder for `printf` output
//!
//! # Execution Model
//!
//! The interpreter walks the statements of `main` in program order. There is
//! no control flow beyond `return`, so execution is one straight line from
//! the first statement to the last.
//!
//! # Built-in Functions
//!
//! `printf` is implemented directly in the engine; there are no user-defined
//! function calls.

pub mod console;
pub mod engine;
pub mod errors;
