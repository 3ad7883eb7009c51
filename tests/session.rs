use std::io::Cursor;

use mutex_lang::{
    error::{Error, ParseError, RuntimeError, ScanError},
    interpreter::value::core::Value,
    repl, run,
    session::Session,
};
use pretty_assertions::assert_eq;

#[test]
fn state_persists_across_runs() {
    let mut session = Session::new();

    session.run("var mut greeting = \"hello\";").unwrap();
    session.run("greeting = greeting + \" world\";").unwrap();

    assert_eq!(session.run("greeting;"), Ok(Value::from("hello world")));
    assert_eq!(session.environment().get("greeting"), Some(Value::from("hello world")));
    assert!(!session.had_error());
}

#[test]
fn each_phase_reports_its_own_error() {
    let mut session = Session::new();

    assert_eq!(session.run("1 @ 2;"),
               Err(Error::Scan(vec![ScanError::UnexpectedCharacter { character: '@',
                                                                     line:      1, }])));
    assert_eq!(session.run("var x;"),
               Err(Error::Parse(ParseError::ExpectedToken { expected: "Mutable/Immutable".to_string(),
                                                            found:    "Identifier".to_string(),
                                                            line:     1, })));
    assert_eq!(session.run("1 / 0;"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
}

#[test]
fn scan_errors_prevent_evaluation() {
    let mut session = Session::new();

    assert!(session.run("var mut x = 1; #").is_err());
    assert_eq!(session.environment().get("x"), None);
}

#[test]
fn error_flag_is_sticky_until_cleared() {
    let mut session = Session::new();

    assert!(session.run("nope;").is_err());
    assert!(session.run("1;").is_ok());
    assert!(session.had_error());

    session.reset_error();
    assert!(!session.had_error());
}

#[test]
fn reset_discards_variables() {
    let mut session = Session::new();
    session.run("var imm x = 1;").unwrap();
    assert!(session.run("nope;").is_err());

    session.reset();

    assert!(!session.had_error());
    assert_eq!(session.environment().get("x"), None);
    assert!(session.run("var imm x = 2;").is_ok());
}

#[test]
fn recovering_run_reports_every_parse_error() {
    let mut session = Session::new();

    let errors = session.run_recovering("1 +;\nvar x;\n2;").unwrap_err();
    let lines: Vec<usize> = errors.iter()
                                  .map(|e| match e {
                                      Error::Parse(error) => error.line(),
                                      other => panic!("unexpected {other:?}"),
                                  })
                                  .collect();

    assert_eq!(lines, vec![1, 2]);
    assert!(session.had_error());
    assert_eq!(session.run_recovering("var mut y = 3; y;"), Ok(Value::Number(3.0)));
}

#[test]
fn error_messages_carry_line_numbers() {
    let error = run("var mut x = 1;\n\nx = missing;").unwrap_err();

    assert_eq!(error.to_string(),
               "Error on line 3: Cannot resolve variable 'missing' as it does not exist in the current or outer scopes.");
}

#[test]
fn scan_error_messages_are_joined() {
    let error = run("@\n$").unwrap_err();

    assert_eq!(error.to_string(),
               "Error on line 1: Unexpected character '@'.\nError on line 2: Unexpected character '$'.");
}

#[test]
fn value_rendering() {
    assert_eq!(run("nil;").unwrap().to_string(), "nil");
    assert_eq!(run("true;").unwrap().to_string(), "true");
    assert_eq!(run("3.5;").unwrap().to_string(), "3.5");
    assert_eq!(run("2 / 2;").unwrap().to_string(), "1");
    assert_eq!(run("\"text\";").unwrap().to_string(), "\"text\"");
    assert_eq!(run("[1, 2, \"a\", [nil]];").unwrap().to_string(), "[1, 2, \"a\", [nil]]");
}

#[test]
fn repl_keeps_going_after_errors() {
    let input = Cursor::new("var mut x = 1;\n\nx = y;\nx = x + 1;\nquit\nx;\n");
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output,
               ">> 1\n>> >> Error on line 1: Cannot resolve variable 'y' as it does not exist in the current or outer scopes.\n>> 2\n>> Exiting...\n");
}

#[test]
fn repl_ends_at_end_of_input() {
    let mut output = Vec::new();

    repl::start(Cursor::new("1 + 1;"), &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), ">> 2\n>> ");
}
