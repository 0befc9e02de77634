//! C source code parser
//!
//! This module transforms C source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported C Subset
//!
//! The parser supports exactly the subset the expression demonstrations need:
//! - Types: `int`, `bool` (`_Bool`)
//! - Statements: declarations with initializers, expression statements, `return`
//! - Expressions: arithmetic, comparison, assignment, ternary, prefix and
//!   postfix `++`/`--`, calls to built-in functions
//! - No preprocessor (`#include` directives are skipped)
//! - No control flow, pointers, structs, or arrays
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with a C precedence ladder for
//! binary operators. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
