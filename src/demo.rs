//! The embedded demonstration program
//!
//! A short C program that walks through the two classic evaluation-order
//! traps this crate exists to illustrate:
//!
//! 1. `cond ? a = 3 : (a = 2)` — assignment sits below the conditional in
//!    C's grammar, so the false arm needs parentheses, and the conditional's
//!    value is whatever the chosen assignment stored.
//! 2. `b--` / `b++` on a `bool` — the postfix result is the pre-store value,
//!    and `_Bool` storage makes decrement a state flip while increment pins
//!    the flag to 1.
//!
//! Running it prints exactly:
//!
//! ```text
//! 3,3
//! 2,2
//! 0
//! 1
//! 0
//! b++:
//! 1
//! 1
//! ```

use crate::interpreter::engine::Interpreter;
use crate::parser::parser::Parser;

/// The demonstration source, as real C.
pub const DEMO_SOURCE: &str = r#"
#include <stdio.h>
#include <stdbool.h>

int main() {
    int a = 0;

    /* The conditional's value is the stored value of whichever assignment
       runs; the second argument reads a after that store. */
    printf("%d,%d\n", 2 > 1 ? a = 3 : (a = 2), a);
    printf("%d,%d\n", 2 < 1 ? a = 3 : (a = 2), a);

    bool b = false;

    /* Each postfix decrement prints the old state, then flips it. */
    printf("%d\n", b--);
    printf("%d\n", b--);
    printf("%d\n", b--);

    printf("b++:\n");

    /* Increment on a bool stores 1, so once set the flag stays set. */
    printf("%d\n", b++);
    printf("%d\n", b++);

    return 0;
}
"#;

/// Parse and execute the demonstration program, returning its output lines.
pub fn run() -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(DEMO_SOURCE)?;
    let program = parser.parse_program()?;

    let mut interpreter = Interpreter::new(program);
    interpreter.run()?;

    Ok(interpreter.console().lines())
}
