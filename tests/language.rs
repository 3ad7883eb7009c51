use std::fs;

use mutex_lang::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    interpreter::{
        environment::Environment, evaluator::core::evaluate_statement, lexer::scan,
        parser::core::parse, value::core::Value,
    },
    run,
};
use walkdir::WalkDir;

const SCRIPTS: &str = "tests/scripts";

#[test]
fn scripts_behave_as_named() {
    let mut count = 0;

    for entry in WalkDir::new(SCRIPTS).into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "mx"))
    {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if name.starts_with("ok_") {
            check_script(&path.display().to_string(), &content);
        } else if name.starts_with("err_") {
            assert!(run(&content).is_err(),
                    "Script {path:?} succeeded but was expected to fail");
        } else {
            panic!("Script {path:?} must be named ok_*.mx or err_*.mx");
        }
    }

    assert!(count > 0, "No scripts found in {SCRIPTS}");
}

/// Returns `true` for statements that state a fact about the script: a bare
/// comparison or a negation.
fn is_check(expression: &Expr) -> bool {
    matches!(expression,
             Expr::Binary { op: BinaryOperator::Equal
                                | BinaryOperator::NotEqual
                                | BinaryOperator::Less
                                | BinaryOperator::LessEqual
                                | BinaryOperator::Greater
                                | BinaryOperator::GreaterEqual,
                            .. }
             | Expr::Unary { op: UnaryOperator::Not,
                             .. })
}

/// Evaluates `src` one top-level statement at a time and requires every check
/// in it to be `true`.
fn check_script(label: &str, src: &str) {
    let output = scan(src);
    assert!(output.is_clean(), "Script {label} failed to scan: {:?}", output.errors);

    let program = parse(&output.tokens).unwrap_or_else(|e| panic!("Script {label} failed:\n{e}"));
    let Statement::Block { body, .. } = program else {
        panic!("Script {label} did not parse to a block");
    };

    let env = Environment::new(None);
    let mut checks = 0;

    for statement in &body {
        let value =
            evaluate_statement(statement, &env).unwrap_or_else(|e| panic!("Script {label} failed:\n{e}"));

        if let Statement::Expression { expression, line } = statement {
            if is_check(expression) {
                checks += 1;
                assert_eq!(value,
                           Value::Boolean(true),
                           "Check on line {line} of {label} does not hold");
            }
        }
    }

    assert!(checks > 0, "Script {label} checks nothing");
}

#[test]
fn script_checks_are_enforced() {
    check_script("inline", "var imm c = 1 - 2 - 3;\nc == -4;\n!(c > 0);");
}

#[test]
#[should_panic(expected = "Check on line 2 of inline does not hold")]
fn false_script_check_fails() {
    check_script("inline", "var imm c = 1 - 2 - 3;\nc == 999;\nc == -4;");
}

#[test]
#[should_panic(expected = "checks nothing")]
fn script_without_checks_fails() {
    check_script("inline", "var mut x = 1; x = x + 1;");
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_true(src: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), "true", "{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn declaration_and_basic_arithmetic() {
    assert_true("var imm x = 1 + 2; x == 3;");
    assert_true("var imm x = 7 * 9; x == 63;");
    assert_true("var imm x = 8 - 5; x == 3;");
    assert_true("var imm x = 10 / 4; x == 2.5;");
}

#[test]
fn compound_assignments() {
    assert_true("var mut x = 2; x += 3; x == 5;");
    assert_true("var mut x = 7; x -= 2; x == 5;");
    assert_true("var mut x = 4; x *= 2; x == 8;");
    assert_true("var mut x = 9; x /= 3; x == 3;");
    assert_true("var mut x = 9; x %= 4; x == 1;");
}

#[test]
fn logical_and_comparisons() {
    assert_true("2 < 3;");
    assert_true("3 > 2;");
    assert_true("2 <= 2;");
    assert_true("3 >= 3;");
    assert_true("2 != 3;");
    assert_true("2 == 2;");
    assert_true("!false;");
    assert_true("true;");
    assert_true("false == false;");
}

#[test]
fn strings() {
    assert_true("\"ab\" + \"cd\" == \"abcd\";");
    assert_true("\"abc\" < \"abd\";");
    assert_success("var imm poem = \"roses\nare red\";");
}

#[test]
fn arrays_and_indexing() {
    assert_true("var imm a = [1, 2, 3]; a[0] == 1;");
    assert_true("var imm b = [3, 2, 1]; b[1] == 2;");
    assert_true("var mut c = []; c = c + [4]; c == [4];");
    assert_true("var mut grid = [[0, 0], [0, 0]]; grid[0][1] = 5; grid == [[0, 5], [0, 0]];");
}

#[test]
fn comments_are_ignored() {
    assert_true("// leading comment\nvar imm x = 1; // trailing comment\nx == 1;");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("var imm x = 1 / 0;");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo == 1;");
}

#[test]
fn immutable_reassignment_is_error() {
    assert_failure("var imm x = 1; x = 2;");
    assert_failure("nil = 1;");
}

#[test]
fn missing_semicolon_is_error() {
    assert_failure("var imm x = 1");
}
