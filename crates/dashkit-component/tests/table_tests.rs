use dashkit_component::{
    columns_from_keys, Codec, Component, Link, Table, TableColumn, TableRow, TableRows, Text,
};
use dashkit_test_utils::{init_tracing, people_table, person_row, projections};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_columns_from_keys_scenario() {
    let columns = columns_from_keys(["name", "age"]);
    assert_eq!(
        columns,
        vec![
            TableColumn {
                name: "name".to_string(),
                accessor: "name".to_string()
            },
            TableColumn {
                name: "age".to_string(),
                accessor: "age".to_string()
            },
        ]
    );
    assert!(columns_from_keys(Vec::<&str>::new()).is_empty());
}

#[test]
fn test_sort_two_rows_by_name() {
    init_tracing();
    let mut table = Table::new("People", columns_from_keys(["name", "age"]));
    table.add([TableRow::new().with("name", Link::new("", "Bob", ""))]);
    table.add([TableRow::new().with("name", Link::new("", "Alice", ""))]);

    table.sort("name");

    assert_eq!(projections(&table, "name"), vec!["Alice", "Bob"]);
}

#[test]
fn test_sort_stability_on_ties() {
    let mut table = people_table(&[("b", "first"), ("a", "x"), ("b", "second")]);

    table.sort("name");

    assert_eq!(projections(&table, "name"), vec!["a", "b", "b"]);
    assert_eq!(projections(&table, "age"), vec!["x", "first", "second"]);
}

#[test]
fn test_sort_after_decode() {
    let codec = Codec::with_defaults();
    let original = Component::from(people_table(&[("Carol", "50"), ("Alice", "33"), ("Bob", "41")]));

    let mut decoded = codec.decode(&codec.encode(&original)).unwrap();
    let table = decoded.as_table_mut().unwrap();
    table.sort("age");

    assert_eq!(projections(table, "name"), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_sort_missing_accessor_first() {
    let mut table = people_table(&[("Bob", "41")]);
    table.add([TableRow::new().with("age", Text::new("7"))]);
    table.add([person_row("Alice", "33")]);

    table.sort("name");

    assert_eq!(projections(&table, "age"), vec!["7", "33", "41"]);
}

#[test]
fn test_empty_table_lifecycle() {
    let mut table = Table::new("People", columns_from_keys(["name", "age"]));
    assert!(table.is_empty());

    table.add([person_row("Alice", "33")]);
    assert!(!table.is_empty());
}

#[test]
fn test_add_column_identity_accessor() {
    let mut table = people_table(&[]);
    table.add_column("role");

    assert_eq!(table.columns().last(), Some(&TableColumn::new("role", "role")));
    assert!(table.is_empty());
}

fn arb_rows() -> impl Strategy<Value = Vec<(Option<String>, usize)>> {
    prop::collection::vec(prop::option::of("[a-c]{0,2}"), 0..20).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_sort_is_stable_and_ordered(rows in arb_rows()) {
        let mut table_rows: TableRows = rows
            .iter()
            .map(|(key, index)| {
                let row = TableRow::new().with("id", Text::new(index.to_string()));
                match key {
                    Some(key) => row.with("key", Link::new("", key.clone(), "")),
                    None => row,
                }
            })
            .collect();

        table_rows.sort("key");

        let mut expected = rows.clone();
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        let expected_ids: Vec<String> = expected.iter().map(|(_, index)| index.to_string()).collect();
        let actual_ids: Vec<String> = table_rows
            .iter()
            .map(|row| row.get("id").map(Component::projection).unwrap_or_default())
            .collect();

        prop_assert_eq!(actual_ids, expected_ids);
    }
}
