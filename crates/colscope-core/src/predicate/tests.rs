use crate::{
    predicate::{CompareOp, ComparePredicate, FieldRef, Predicate},
    traits::FieldValues,
    value::Value,
};
use std::collections::BTreeMap;

// ---- helpers -----------------------------------------------------------

struct Row(BTreeMap<&'static str, Value>);

impl FieldValues for Row {
    fn get_value(&self, field: &str) -> Option<Value> {
        self.0.get(field).cloned()
    }
}

fn row(fields: &[(&'static str, Value)]) -> Row {
    Row(fields.iter().cloned().collect())
}

// ---- tests -------------------------------------------------------------

#[test]
fn field_ref_builds_strict_equality() {
    let predicate = FieldRef::new("user_id").eq(42_u64);

    assert_eq!(
        predicate,
        Predicate::Compare(ComparePredicate {
            field: "user_id".to_string(),
            op: CompareOp::Eq,
            value: Value::Uint(42),
        })
    );
    assert_eq!(predicate.to_string(), "user_id = 42");
}

#[test]
fn ne_renders_and_negates() {
    let predicate = FieldRef::new("status").ne("closed");
    let open = row(&[("status", Value::Text("open".into()))]);

    assert_eq!(predicate.to_string(), "status != \"closed\"");
    assert!(predicate.eval(&open));
}

#[test]
fn missing_field_never_matches() {
    let empty = row(&[]);

    assert!(!FieldRef::new("a").eq(1).eval(&empty));
    assert!(!FieldRef::new("a").ne(1).eval(&empty));
}

#[test]
fn and_flattens_and_drops_true() {
    let a = FieldRef::new("a").eq(1);
    let b = FieldRef::new("b").eq(2);
    let c = FieldRef::new("c").eq(3);

    let nested = Predicate::and([
        Predicate::True,
        Predicate::and([a.clone(), b.clone()]),
        c.clone(),
    ]);

    assert_eq!(nested, Predicate::And(vec![a.clone(), b, c]));
    assert_eq!(Predicate::and([Predicate::True, a.clone()]), a);
    assert_eq!(Predicate::and(Vec::new()), Predicate::True);
}

#[test]
fn conjunction_requires_every_term() {
    let predicate = Predicate::and([FieldRef::new("a").eq(1), FieldRef::new("b").eq("x")]);

    assert!(predicate.eval(&row(&[("a", Value::Int(1)), ("b", Value::Text("x".into()))])));
    assert!(!predicate.eval(&row(&[("a", Value::Int(1)), ("b", Value::Text("y".into()))])));
    assert_eq!(predicate.to_string(), "a = 1 AND b = \"x\"");
}

#[test]
fn option_none_compares_against_null() {
    let predicate = FieldRef::new("deleted_at").eq(None::<u64>);

    assert!(predicate.eval(&row(&[("deleted_at", Value::Null)])));
    assert!(!predicate.eval(&row(&[("deleted_at", Value::Uint(3))])));
}
