//! Testing utilities for dashkit workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use dashkit_component::{columns_from_keys, Component, Link, Table, TableRow, Text};
use serde_json::{json, Value};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer fmt subscriber once per process
///
/// Filter comes from `RUST_LOG`, defaulting to `dashkit_component=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("dashkit_component=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn name_link(name: &str) -> Link {
    Link::new("", name, format!("/people/{}", name.to_lowercase()))
}

pub fn person_row(name: &str, age: &str) -> TableRow {
    TableRow::new()
        .with("name", name_link(name))
        .with("age", Text::new(age))
}

/// `name`/`age` table with rows in the given order
pub fn people_table(people: &[(&str, &str)]) -> Table {
    Table::new_with_rows(
        "People",
        columns_from_keys(["name", "age"]),
        people.iter().map(|(name, age)| person_row(name, age)),
    )
}

pub fn projections(table: &Table, accessor: &str) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| row.get(accessor).map(Component::projection).unwrap_or_default())
        .collect()
}

/// Raw link envelope, as it appears on the wire
pub fn link_envelope(text: &str, reference: &str) -> Value {
    json!({
        "metadata": {"type": "link"},
        "config": {"value": text, "ref": reference}
    })
}

/// Raw table envelope with a `name` column
pub fn name_table_envelope(cells: Vec<Value>) -> Value {
    let rows: Vec<Value> = cells.into_iter().map(|cell| json!({ "name": cell })).collect();
    json!({
        "metadata": {"type": "table"},
        "config": {
            "columns": [{"name": "name", "accessor": "name"}],
            "rows": rows,
            "emptyContent": ""
        }
    })
}
