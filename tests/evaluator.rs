use mutex_lang::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, evaluate_statement},
        lexer::scan,
        parser::core::parse,
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

fn evaluate_in(source: &str, env: &Environment) -> EvalResult<Value> {
    let program = parse(&scan(source).tokens).unwrap_or_else(|e| panic!("{source}: {e}"));
    evaluate_statement(&program, env)
}

fn evaluate(source: &str) -> EvalResult<Value> {
    evaluate_in(source, &Environment::new(None))
}

fn number(source: &str) -> f64 {
    match evaluate(source) {
        Ok(Value::Number(n)) => n,
        other => panic!("{source}: expected a number, got {other:?}"),
    }
}

fn boolean(source: &str) -> bool {
    match evaluate(source) {
        Ok(Value::Boolean(b)) => b,
        other => panic!("{source}: expected a boolean, got {other:?}"),
    }
}

#[test]
fn arithmetic() {
    assert_eq!(number("1 + 2 * 3;"), 7.0);
    assert_eq!(number("(1 + 2) * 3;"), 9.0);
    assert_eq!(number("1 - 2 - 3;"), -4.0);
    assert_eq!(number("7 / 2;"), 3.5);
    assert_eq!(number("-4 * -2;"), 8.0);
}

#[test]
fn modulo_follows_the_dividend() {
    assert_eq!(number("7 % 2;"), 1.0);
    assert_eq!(number("-7 % 2;"), -1.0);
    assert_eq!(number("7.5 % 2;"), 1.5);
}

#[test]
fn division_and_modulo_by_zero_fail() {
    assert_eq!(evaluate("10 / 0;"), Err(RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(evaluate("10 % 0;"), Err(RuntimeError::ModuloByZero { line: 1 }));
}

#[test]
fn comparisons() {
    assert!(boolean("1 < 2;"));
    assert!(boolean("2 <= 2;"));
    assert!(!boolean("1 > 2;"));
    assert!(boolean("3 >= 2;"));
    assert!(boolean("\"apple\" < \"banana\";"));
    assert!(!boolean("\"b\" <= \"a\";"));
}

#[test]
fn equality_is_structural() {
    assert!(boolean("1 == 1;"));
    assert!(boolean("[1, [2]] == [1, [2]];"));
    assert!(boolean("\"a\" != \"b\";"));
    assert!(!boolean("1 == \"1\";"));
    assert!(boolean("nil == nil;"));
    assert!(boolean("true != false;"));
}

#[test]
fn concatenation() {
    assert_eq!(evaluate("\"foo\" + \"bar\";"), Ok(Value::from("foobar")));
    assert_eq!(evaluate("[1] + [2, 3];").unwrap().to_string(), "[1, 2, 3]");
}

#[test]
fn type_mismatches_name_the_operator() {
    let Err(RuntimeError::TypeError { details, line }) = evaluate("\n1 + \"a\";") else {
        panic!("expected a type error");
    };

    assert_eq!(line, 2);
    assert_eq!(details, "Unsupported operand types for '+': number and string");
    assert!(matches!(evaluate("[1] - [1];"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("\"a\" * 2;"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("nil < 1;"), Err(RuntimeError::TypeError { .. })));
}

#[test]
fn unary_operators() {
    assert_eq!(number("-(2 + 3);"), -5.0);
    assert!(boolean("!false;"));
    assert!(boolean("!(1 > 2);"));
    assert!(matches!(evaluate("-\"x\";"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("!0;"), Err(RuntimeError::TypeError { .. })));
}

#[test]
fn declarations_yield_their_value() {
    assert_eq!(evaluate("var mut x = 5;"), Ok(Value::Number(5.0)));
    assert_eq!(evaluate("var imm y;"), Ok(Value::Nil));
    assert_eq!(evaluate(""), Ok(Value::Nil));
}

#[test]
fn assignment_yields_assigned_value() {
    let env = Environment::new(None);

    assert_eq!(evaluate_in("var mut a; var mut b; a = b = 3;", &env), Ok(Value::Number(3.0)));
    assert_eq!(env.lookup("a", 1), Ok(Value::Number(3.0)));
    assert_eq!(env.lookup("b", 1), Ok(Value::Number(3.0)));
}

#[test]
fn compound_assignment() {
    assert_eq!(number("var mut x = 10; x += 5; x -= 3; x *= 2; x /= 4; x;"), 6.0);
    assert_eq!(number("var mut x = 17; x %= 5;"), 2.0);
    assert_eq!(evaluate("var mut s = \"a\"; s += \"b\";"), Ok(Value::from("ab")));
}

#[test]
fn assignment_errors() {
    assert!(matches!(evaluate("var imm x = 1; x = 2;"),
                     Err(RuntimeError::ImmutableAssignment { .. })));
    assert!(matches!(evaluate("y = 2;"), Err(RuntimeError::UndeclaredAssignment { .. })));
    assert_eq!(evaluate("1 = 2;"), Err(RuntimeError::InvalidAssignmentTarget { line: 1 }));
    assert_eq!(evaluate("var mut x; (x + 1) = 2;"),
               Err(RuntimeError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(evaluate("true = false;"), Err(RuntimeError::ImmutableAssignment { .. })));
}

#[test]
fn unknown_variable() {
    assert_eq!(evaluate("1;\nfoo;"),
               Err(RuntimeError::UnknownVariable { name: "foo".to_string(),
                                                   line: 2, }));
}

#[test]
fn redeclaration() {
    assert!(matches!(evaluate("var mut x; var imm x;"), Err(RuntimeError::Redeclaration { .. })));
}

#[test]
fn nested_blocks_share_the_enclosing_scope() {
    assert_eq!(number("var mut x = 1; { x = x + 1; { x = x * 10; } } x;"), 20.0);
    assert_eq!(number("{ var mut inner = 4; } inner;"), 4.0);
    assert_eq!(evaluate("{ }"), Ok(Value::Nil));
}

#[test]
fn array_indexing() {
    assert_eq!(number("var imm a = [10, 20, 30]; a[1];"), 20.0);
    assert_eq!(number("var imm m = [[1, 2], [3, 4]]; m[1][0];"), 3.0);
    assert_eq!(number("[5, 6][0 + 1];"), 6.0);
}

#[test]
fn array_indexing_errors() {
    assert_eq!(evaluate("var imm a = [1, 2]; a[2];"),
               Err(RuntimeError::IndexOutOfBounds { index:  2,
                                                    length: 2,
                                                    line:   1, }));
    assert!(matches!(evaluate("[1][-1];"), Err(RuntimeError::IndexOutOfBounds { index: -1, .. })));
    assert!(matches!(evaluate("[1][0.5];"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("[1][\"0\"];"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("5[0];"), Err(RuntimeError::TypeError { .. })));
}

#[test]
fn index_assignment_mutates_in_place() {
    let env = Environment::new(None);

    assert_eq!(evaluate_in("var mut a = [1, 2, 3]; a[1] = 9;", &env), Ok(Value::Number(9.0)));
    assert_eq!(env.lookup("a", 1).unwrap().to_string(), "[1, 9, 3]");

    evaluate_in("a[2] += 10;", &env).unwrap();
    assert_eq!(env.lookup("a", 1).unwrap().to_string(), "[1, 9, 13]");

    evaluate_in("var mut m = [[0, 0], [0, 0]]; m[1][1] = a;", &env).unwrap();
    assert_eq!(env.lookup("m", 1).unwrap().to_string(), "[[0, 0], [0, [1, 9, 13]]]");
}

#[test]
fn index_assignment_reaches_outer_scope() {
    let global = Environment::new(None);
    evaluate_in("var mut a = [0];", &global).unwrap();

    evaluate_in("a[0] = 1;", &global.child()).unwrap();
    assert_eq!(global.lookup("a", 1).unwrap().to_string(), "[1]");
}

#[test]
fn index_assignment_errors() {
    assert!(matches!(evaluate("var imm a = [1]; a[0] = 2;"),
                     Err(RuntimeError::ImmutableAssignment { .. })));
    assert!(matches!(evaluate("var mut a = [1]; a[1] = 2;"),
                     Err(RuntimeError::IndexOutOfBounds { .. })));
    assert!(matches!(evaluate("var mut a = 1; a[0] = 2;"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("[1][0] = 2;"), Err(RuntimeError::InvalidAssignmentTarget { .. })));
}

#[test]
fn copies_are_independent() {
    let env = Environment::new(None);
    evaluate_in("var mut a = [1, 2]; var mut b = a; b[0] = 100;", &env).unwrap();

    assert_eq!(env.lookup("a", 1).unwrap().to_string(), "[1, 2]");
    assert_eq!(env.lookup("b", 1).unwrap().to_string(), "[100, 2]");
}

#[test]
fn postfix_returns_previous_value() {
    let env = Environment::new(None);

    assert_eq!(evaluate_in("var mut i = 5; i++;", &env), Ok(Value::Number(5.0)));
    assert_eq!(env.lookup("i", 1), Ok(Value::Number(6.0)));

    assert_eq!(evaluate_in("i--;", &env), Ok(Value::Number(6.0)));
    assert_eq!(evaluate_in("i-- + 100;", &env), Ok(Value::Number(105.0)));
    assert_eq!(env.lookup("i", 1), Ok(Value::Number(4.0)));

    assert_eq!(evaluate_in("var mut a = [1, 2]; a[1]++;", &env), Ok(Value::Number(2.0)));
    assert_eq!(env.lookup("a", 1).unwrap().to_string(), "[1, 3]");
}

#[test]
fn postfix_errors() {
    assert!(matches!(evaluate("var imm i = 1; i++;"), Err(RuntimeError::ImmutableAssignment { .. })));
    assert!(matches!(evaluate("var mut s = \"x\"; s++;"), Err(RuntimeError::TypeError { .. })));
    assert!(matches!(evaluate("3++;"), Err(RuntimeError::InvalidAssignmentTarget { .. })));
    assert!(matches!(evaluate("ghost++;"), Err(RuntimeError::UndeclaredAssignment { .. })));
}

#[test]
fn declarations_before_a_failure_persist() {
    let env = Environment::new(None);

    assert!(evaluate_in("var mut kept = 1; kept / 0; var mut lost = 2;", &env).is_err());
    assert_eq!(env.lookup("kept", 1), Ok(Value::Number(1.0)));
    assert!(env.lookup("lost", 1).is_err());
}
