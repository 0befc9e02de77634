// Integration tests for the evaluation semantics the demonstration rests on

use boolflip::interpreter::engine::Interpreter;
use boolflip::interpreter::errors::RuntimeError;
use boolflip::parser::parser::Parser;

/// Run a C snippet and return its printed lines.
fn run_program(source: &str) -> Vec<String> {
    let mut parser = Parser::new(source).expect("Parser creation failed");
    let program = parser.parse_program().expect("Parsing failed");

    let mut interpreter = Interpreter::new(program);
    interpreter.run().expect("Execution failed");

    interpreter.console().lines()
}

/// Run a C snippet expected to fail at runtime, returning the error.
fn run_expecting_error(source: &str) -> RuntimeError {
    let mut parser = Parser::new(source).expect("Parser creation failed");
    let program = parser.parse_program().expect("Parsing failed");

    let mut interpreter = Interpreter::new(program);
    interpreter
        .run()
        .expect_err("expected a runtime error, but execution succeeded")
}

#[test]
fn test_postfix_decrement_prints_value_before_store() {
    let output = run_program(
        r#"
        int main() {
            bool b = false;
            printf("%d\n", b--);
            printf("%d\n", b--);
            printf("%d\n", b--);
            printf("%d\n", b--);
            return 0;
        }
        "#,
    );

    // Each print shows the state captured before that decrement's flip
    assert_eq!(output, vec!["0", "1", "0", "1"]);
}

#[test]
fn test_bool_increment_pins_flag_to_one() {
    let output = run_program(
        r#"
        int main() {
            bool b = false;
            printf("%d\n", b++);
            printf("%d\n", b++);
            printf("%d\n", b++);
            return 0;
        }
        "#,
    );

    // First print shows the initial 0; after that the flag is stuck at 1
    assert_eq!(output, vec!["0", "1", "1"]);
}

#[test]
fn test_bool_decrement_parity() {
    // An even number of flips returns the flag to its start state, an odd
    // number leaves the complement.
    let even = run_program(
        r#"
        int main() {
            bool b = false;
            b--;
            b--;
            printf("%d\n", b);
            return 0;
        }
        "#,
    );
    assert_eq!(even, vec!["0"]);

    let odd = run_program(
        r#"
        int main() {
            bool b = false;
            b--;
            b--;
            b--;
            printf("%d\n", b);
            return 0;
        }
        "#,
    );
    assert_eq!(odd, vec!["1"]);
}

#[test]
fn test_prefix_forms_yield_stored_value() {
    let output = run_program(
        r#"
        int main() {
            bool b = false;
            printf("%d\n", --b);
            printf("%d\n", ++b);
            int n = 5;
            printf("%d\n", ++n);
            printf("%d\n", --n);
            return 0;
        }
        "#,
    );

    assert_eq!(output, vec!["1", "1", "6", "5"]);
}

#[test]
fn test_ternary_result_is_assignments_stored_value() {
    let output = run_program(
        r#"
        int main() {
            int a = 0;
            printf("%d,%d\n", 2 > 1 ? a = 3 : (a = 2), a);
            printf("%d,%d\n", 2 < 1 ? a = 3 : (a = 2), a);
            return 0;
        }
        "#,
    );

    assert_eq!(output, vec!["3,3", "2,2"]);
}

#[test]
fn test_ternary_evaluates_only_taken_arm() {
    let output = run_program(
        r#"
        int main() {
            int a = 0;
            int r = 1 ? 5 : (a = 9);
            printf("%d,%d\n", r, a);
            return 0;
        }
        "#,
    );

    // The false arm's assignment never ran
    assert_eq!(output, vec!["5,0"]);
}

#[test]
fn test_printf_arguments_evaluate_left_to_right() {
    let output = run_program(
        r#"
        int main() {
            int a = 0;
            printf("%d,%d,%d\n", a = 7, a, a = 1);
            printf("%d\n", a);
            return 0;
        }
        "#,
    );

    assert_eq!(output, vec!["7,7,1", "1"]);
}

#[test]
fn test_bool_assignment_coerces_through_truthiness() {
    let output = run_program(
        r#"
        int main() {
            bool b = false;
            b = 42;
            printf("%d\n", b);
            b = 0;
            printf("%d\n", b);
            int n = 0;
            n = true;
            printf("%d\n", n);
            return 0;
        }
        "#,
    );

    assert_eq!(output, vec!["1", "0", "1"]);
}

#[test]
fn test_comparisons_yield_int() {
    let output = run_program(
        r#"
        int main() {
            printf("%d\n", (2 > 1) + (3 > 2));
            printf("%d\n", 2 < 1);
            return 0;
        }
        "#,
    );

    assert_eq!(output, vec!["2", "0"]);
}

#[test]
fn test_arithmetic_precedence() {
    let output = run_program(
        r#"
        int main() {
            printf("%d\n", 1 + 2 * 3);
            printf("%d\n", (1 + 2) * 3);
            printf("%d\n", 10 - 4 - 3);
            printf("%d\n", 7 % 3);
            return 0;
        }
        "#,
    );

    assert_eq!(output, vec!["7", "9", "3", "1"]);
}

#[test]
fn test_int_increment_overflow_is_an_error() {
    let err = run_expecting_error(
        r#"
        int main() {
            int n = 2147483647;
            n++;
            return 0;
        }
        "#,
    );

    assert!(matches!(err, RuntimeError::IntegerOverflow { .. }));
}

#[test]
fn test_uninitialized_read_is_an_error() {
    let err = run_expecting_error(
        r#"
        int main() {
            int x;
            printf("%d\n", x);
            return 0;
        }
        "#,
    );

    match err {
        RuntimeError::UninitializedRead { var, .. } => assert_eq!(var, "x"),
        other => panic!("Expected uninitialized read, got {:?}", other),
    }
}

#[test]
fn test_undefined_variable_is_an_error() {
    let err = run_expecting_error(
        r#"
        int main() {
            y = 3;
            return 0;
        }
        "#,
    );

    assert!(matches!(err, RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn test_division_by_zero_is_an_error() {
    let err = run_expecting_error(
        r#"
        int main() {
            int n = 1 / 0;
            return 0;
        }
        "#,
    );

    assert!(matches!(err, RuntimeError::DivisionError { .. }));
}

#[test]
fn test_increment_of_literal_is_an_error() {
    let err = run_expecting_error(
        r#"
        int main() {
            5++;
            return 0;
        }
        "#,
    );

    assert!(matches!(err, RuntimeError::NotAnLvalue { .. }));
}

#[test]
fn test_missing_main_is_an_error() {
    let err = run_expecting_error(
        r#"
        int helper() {
            return 0;
        }
        "#,
    );

    assert!(matches!(err, RuntimeError::NoMainFunction));
}

#[test]
fn test_statements_after_return_do_not_run() {
    let output = run_program(
        r#"
        int main() {
            printf("before\n");
            return 0;
            printf("after\n");
        }
        "#,
    );

    assert_eq!(output, vec!["before"]);
}
