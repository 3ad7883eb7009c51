use mutex_lang::{
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};
use pretty_assertions::assert_eq;

#[test]
fn global_scope_predeclares_constants() {
    let global = Environment::new(None);

    assert_eq!(global.get("nil"), Some(Value::Nil));
    assert_eq!(global.get("true"), Some(Value::Boolean(true)));
    assert_eq!(global.get("false"), Some(Value::Boolean(false)));
    assert!(!global.is_mutable("true"));
    assert!(matches!(global.assign("true", Value::Boolean(false), 1),
                     Err(RuntimeError::ImmutableAssignment { .. })));
}

#[test]
fn child_scope_starts_empty() {
    let global = Environment::new(None);
    let child = global.child();

    assert_eq!(child.get("true"), None);
    assert_eq!(child.lookup("true", 1), Ok(Value::Boolean(true)));
    assert!(child.parent().is_some());
    assert!(global.parent().is_none());
}

#[test]
fn shadowing_does_not_affect_parent() {
    let global = Environment::new(None);
    global.declare("x", Value::Number(1.0), true, 1).unwrap();

    let child = Environment::new(Some(&global));
    child.declare("x", Value::Number(2.0), true, 2).unwrap();
    child.assign("x", Value::Number(3.0), 3).unwrap();

    assert_eq!(child.lookup("x", 4), Ok(Value::Number(3.0)));
    assert_eq!(global.lookup("x", 4), Ok(Value::Number(1.0)));
}

#[test]
fn assignment_reaches_declaring_scope() {
    let global = Environment::new(None);
    global.declare("x", Value::Number(1.0), true, 1).unwrap();

    let grandchild = global.child().child();
    grandchild.assign("x", Value::from("changed"), 2).unwrap();

    assert_eq!(global.get("x"), Some(Value::from("changed")));
    assert_eq!(grandchild.get("x"), None);
}

#[test]
fn immutable_reassignment_fails() {
    let env = Environment::new(None);
    env.declare("limit", Value::Number(10.0), false, 1).unwrap();

    assert_eq!(env.assign("limit", Value::Number(11.0), 2),
               Err(RuntimeError::ImmutableAssignment { name: "limit".to_string(),
                                                       line: 2, }));
    assert_eq!(env.lookup("limit", 3), Ok(Value::Number(10.0)));
}

#[test]
fn mutable_reassignment_is_observed() {
    let env = Environment::new(None);
    env.declare("count", Value::Number(0.0), true, 1).unwrap();
    env.assign("count", Value::Number(5.0), 2).unwrap();

    assert!(env.is_mutable("count"));
    assert_eq!(env.lookup("count", 3), Ok(Value::Number(5.0)));
}

#[test]
fn redeclaration_fails_in_same_scope_only() {
    let global = Environment::new(None);
    global.declare("x", Value::Nil, true, 1).unwrap();

    assert_eq!(global.declare("x", Value::Nil, true, 2),
               Err(RuntimeError::Redeclaration { name: "x".to_string(),
                                                 line: 2, }));
    assert_eq!(global.child().declare("x", Value::Nil, false, 3), Ok(()));
}

#[test]
fn unknown_names() {
    let env = Environment::new(None).child();

    assert_eq!(env.lookup("ghost", 7),
               Err(RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                                   line: 7, }));
    assert!(matches!(env.resolve("ghost", 7), Err(RuntimeError::UnknownVariable { .. })));
    assert_eq!(env.assign("ghost", Value::Nil, 8),
               Err(RuntimeError::UndeclaredAssignment { name: "ghost".to_string(),
                                                        line: 8, }));
}

#[test]
fn resolve_finds_innermost_declaring_scope() {
    let global = Environment::new(None);
    global.declare("x", Value::Number(1.0), true, 1).unwrap();
    let child = global.child();

    let owner = child.resolve("x", 2).unwrap();
    assert_eq!(owner.get("x"), Some(Value::Number(1.0)));

    child.declare("x", Value::Number(2.0), true, 3).unwrap();
    let owner = child.resolve("x", 4).unwrap();
    assert_eq!(owner.get("x"), Some(Value::Number(2.0)));
}

#[test]
fn update_mutates_in_place() {
    let env = Environment::new(None);
    env.declare("items", Value::from(vec![Value::Number(1.0)]), true, 1).unwrap();

    let length = env.update("items", 2, |slot| {
                        if let Value::Array(items) = slot {
                            items.push(Value::Number(2.0));
                            return Ok(items.len());
                        }
                        Ok(0)
                    })
                    .unwrap();

    assert_eq!(length, 2);
    assert_eq!(env.lookup("items", 3).unwrap().to_string(), "[1, 2]");
}

#[test]
fn update_respects_immutability() {
    let env = Environment::new(None);
    env.declare("frozen", Value::Array(vec![]), false, 1).unwrap();

    let result = env.update("frozen", 2, |_| Ok(()));
    assert!(matches!(result, Err(RuntimeError::ImmutableAssignment { line: 2, .. })));
}

#[test]
fn copies_do_not_alias() {
    let env = Environment::new(None);
    env.declare("a", Value::from(vec![Value::Number(1.0)]), true, 1).unwrap();

    let copy = env.lookup("a", 2).unwrap();
    env.declare("b", copy, true, 2).unwrap();
    env.update("b", 3, |slot| {
           *slot = Value::Nil;
           Ok(())
       })
       .unwrap();

    assert_eq!(env.lookup("a", 4).unwrap().to_string(), "[1]");
}
