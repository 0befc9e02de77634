//! # Introduction
//!
//! boolflip executes a fixed C demonstration program through a small
//! interpreter so that two easy-to-misread pieces of C behave exactly as a
//! conforming compiler would make them behave: the precedence interaction
//! between the conditional operator and assignment, and the defined
//! semantics of `++`/`--` on a `_Bool`.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Interpreter → Console
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an AST.
//! 2. [`interpreter`] — walks the AST and records `printf` output in a
//!    [`interpreter::console::Console`].
//! 3. [`memory`] — tagged [`memory::value::Value`] variants in a flat
//!    [`memory::scope::Scope`] of typed slots; `bool` slots can only ever
//!    hold two states.
//! 4. [`demo`] — the embedded demonstration program and its runner.
//!
//! ## Supported C subset
//!
//! Types: `int`, `bool`. Statements: declarations, expression statements,
//! `return`. Expressions: arithmetic, comparisons, assignment, the ternary,
//! prefix/postfix `++` and `--`. Built-ins: `printf` (`%d`, `%%`).

pub mod demo;
pub mod interpreter;
pub mod memory;
pub mod parser;
