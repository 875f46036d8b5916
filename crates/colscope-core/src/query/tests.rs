use crate::{
    predicate::{FieldRef, Predicate},
    query::Query,
    traits::{FieldValues, ScopeTarget},
    value::Value,
};

#[derive(Debug, PartialEq)]
struct Order {
    id: u64,
    user_id: u64,
    status: &'static str,
}

impl ScopeTarget for Order {
    const PATH: &'static str = "test::Order";
}

impl FieldValues for Order {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Uint(self.id)),
            "user_id" => Some(Value::Uint(self.user_id)),
            "status" => Some(Value::Text(self.status.to_string())),
            _ => None,
        }
    }
}

fn orders() -> Vec<Order> {
    vec![
        Order { id: 1, user_id: 42, status: "open" },
        Order { id: 2, user_id: 7, status: "open" },
        Order { id: 3, user_id: 42, status: "closed" },
        Order { id: 4, user_id: 42, status: "open" },
    ]
}

fn ids(rows: &[&Order]) -> Vec<u64> {
    rows.iter().map(|row| row.id).collect()
}

#[test]
fn unfiltered_query_matches_everything() {
    let rows = orders();
    let query = Order::query();

    assert_eq!(query.predicate(), Predicate::True);
    assert_eq!(ids(&query.evaluate(&rows)), vec![1, 2, 3, 4]);
    assert_eq!(query.entity_path(), "test::Order");
}

#[test]
fn filters_chain_as_conjunction() {
    let rows = orders();
    let query = Order::query()
        .filter_eq("user_id", 42)
        .filter(FieldRef::new("status").eq("open"));

    assert_eq!(query.predicates().len(), 2);
    assert_eq!(query.to_string(), "WHERE user_id = 42 AND status = \"open\"");
    assert_eq!(ids(&query.evaluate(&rows)), vec![1, 4]);
}

#[test]
fn limit_truncates_in_input_order() {
    let rows = orders();
    let query = Order::query().filter_eq("user_id", 42_u64).limit(2);

    assert_eq!(query.max_rows(), Some(2));
    assert_eq!(query.to_string(), "WHERE user_id = 42 LIMIT 2");
    assert_eq!(ids(&query.evaluate(&rows)), vec![1, 3]);
}

#[test]
fn unknown_column_matches_nothing() {
    let rows = orders();
    let query = Order::query().filter_eq("seller_id", 42);

    assert!(query.evaluate(&rows).is_empty());
}

#[test]
fn clone_and_equality_ignore_entity_bounds() {
    let query = Query::<Order>::new().filter_eq("id", 1);

    assert_eq!(query.clone(), query);
    assert_ne!(query.clone().limit(1), query);
}
