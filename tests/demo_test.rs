// End-to-end test for the embedded demonstration program

use boolflip::demo;
use boolflip::interpreter::engine::Interpreter;
use boolflip::parser::parser::Parser;

#[test]
fn test_demo_transcript_is_exact() {
    let lines = demo::run().expect("demo execution failed");

    assert_eq!(
        lines,
        vec!["3,3", "2,2", "0", "1", "0", "b++:", "1", "1"],
        "demonstration output must match the documented transcript line for line"
    );
}

#[test]
fn test_demo_source_parses_as_single_main() {
    let mut parser = Parser::new(demo::DEMO_SOURCE).expect("Parser creation failed");
    let program = parser.parse_program().expect("Parsing failed");

    assert_eq!(program.functions.len(), 1);
    assert!(program.function("main").is_some());
}

#[test]
fn test_demo_rerun_reproduces_output() {
    // No state survives a run; a fresh interpreter over the same source
    // must produce the identical transcript.
    let first = demo::run().expect("first run failed");
    let second = demo::run().expect("second run failed");
    assert_eq!(first, second);

    let mut parser = Parser::new(demo::DEMO_SOURCE).expect("Parser creation failed");
    let program = parser.parse_program().expect("Parsing failed");
    let mut interpreter = Interpreter::new(program);
    interpreter.run().expect("Execution failed");
    assert_eq!(interpreter.console().lines(), first);
}

#[test]
fn test_conditional_lines_pair_result_with_counter() {
    // On both conditional lines the printed conditional result and the
    // printed counter are the same stored value.
    let lines = demo::run().expect("demo execution failed");

    for line in &lines[..2] {
        let mut parts = line.split(',');
        let result = parts.next().unwrap();
        let counter = parts.next().unwrap();
        assert_eq!(result, counter, "line '{}' should pair equal values", line);
    }
}
