//! Table component
//!
//! A table owns an ordered column list and an ordered row list. Each row maps
//! column accessors to arbitrary nested components, so decoding a table
//! recursively decodes every cell.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::{DecodeScope, RawComponent};
use crate::component::{private, Component, View};
use crate::error::DecodeError;
use crate::kind::ComponentKind;
use crate::metadata::{title_from_string, Metadata};

/// Column description
///
/// `accessor` is the key this column appears under in each [`TableRow`] and
/// should be unique within a table. Nothing checks this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableColumn {
    /// Display label
    pub name: String,
    /// Row key
    pub accessor: String,
}

impl TableColumn {
    /// Create column with distinct name and accessor
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessor: accessor.into(),
        }
    }

    /// Create column whose accessor is its name
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            accessor: name.clone(),
            name,
        }
    }
}

/// Build one column per key, with name and accessor both set to the key
///
/// No keys gives no columns.
#[must_use]
pub fn columns_from_keys<I, K>(keys: I) -> Vec<TableColumn>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    keys.into_iter().map(TableColumn::named).collect()
}

/// One table row: accessor → cell
///
/// Iteration is in accessor order. Column order, not row order, decides how
/// cells are displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    cells: BTreeMap<String, Component>,
}

impl TableRow {
    /// Create empty row
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, builder style
    #[inline]
    #[must_use]
    pub fn with(mut self, accessor: impl Into<String>, cell: impl Into<Component>) -> Self {
        self.insert(accessor, cell);
        self
    }

    /// Set a cell, returning the previous one
    #[inline]
    pub fn insert(
        &mut self,
        accessor: impl Into<String>,
        cell: impl Into<Component>,
    ) -> Option<Component> {
        self.cells.insert(accessor.into(), cell.into())
    }

    /// Cell for accessor
    #[inline]
    #[must_use]
    pub fn get(&self, accessor: &str) -> Option<&Component> {
        self.cells.get(accessor)
    }

    /// Remove cell for accessor
    #[inline]
    pub fn remove(&mut self, accessor: &str) -> Option<Component> {
        self.cells.remove(accessor)
    }

    /// Check if row has a cell for accessor
    #[inline]
    #[must_use]
    pub fn contains(&self, accessor: &str) -> bool {
        self.cells.contains_key(accessor)
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over (accessor, cell)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.cells.iter().map(|(accessor, cell)| (accessor.as_str(), cell))
    }

    fn to_wire(&self) -> Value {
        let cells = self
            .cells
            .iter()
            .map(|(accessor, cell)| (accessor.clone(), cell.to_value()))
            .collect::<Map<String, Value>>();
        Value::Object(cells)
    }
}

impl<K: Into<String>, C: Into<Component>> FromIterator<(K, C)> for TableRow {
    fn from_iter<T: IntoIterator<Item = (K, C)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (accessor, cell) in iter {
            row.insert(accessor, cell);
        }
        row
    }
}

/// Ordered rows of a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRows(Vec<TableRow>);

impl TableRows {
    /// Create empty row list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    #[inline]
    pub fn push(&mut self, row: TableRow) {
        self.0.push(row);
    }

    /// Mutable row reference
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut TableRow> {
        self.0.get_mut(index)
    }

    /// Unwrap into the row vector
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<TableRow> {
        self.0
    }

    /// Stable sort by the textual projection of the cell at `accessor`
    ///
    /// Projections compare lexicographically by bytes. A row with no cell at
    /// `accessor` sorts before every row that has one; such rows keep their
    /// relative order. Sorting by an accessor no row has leaves the order
    /// unchanged.
    pub fn sort(&mut self, accessor: &str) {
        if !self.0.iter().any(|row| row.contains(accessor)) {
            tracing::debug!(accessor, rows = self.0.len(), "no row has sort column; order unchanged");
            return;
        }
        // Option orders None first, which places rows without the cell first.
        self.0
            .sort_by_cached_key(|row| row.get(accessor).map(Component::projection));
    }
}

impl Deref for TableRows {
    type Target = [TableRow];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Extend<TableRow> for TableRows {
    fn extend<T: IntoIterator<Item = TableRow>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<TableRow> for TableRows {
    fn from_iter<T: IntoIterator<Item = TableRow>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<TableRow>> for TableRows {
    fn from(rows: Vec<TableRow>) -> Self {
        Self(rows)
    }
}

impl IntoIterator for TableRows {
    type Item = TableRow;
    type IntoIter = std::vec::IntoIter<TableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TableRows {
    type Item = &'a TableRow;
    type IntoIter = std::slice::Iter<'a, TableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Contents of a [`Table`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableConfig {
    /// Columns, in display order
    pub columns: Vec<TableColumn>,
    /// Rows, in insertion order unless sorted
    pub rows: TableRows,
    /// Message shown when there are no rows
    pub empty_content: String,
}

/// Wire shape of [`TableConfig`] before cells are decoded
///
/// Missing or `null` fields read as empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTableConfig {
    #[serde(default)]
    columns: Option<Vec<TableColumn>>,
    #[serde(default)]
    rows: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    empty_content: Option<String>,
}

/// Table of nested components. Not title-capable.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    metadata: Metadata,
    config: TableConfig,
}

impl Table {
    /// Create empty table with columns
    #[must_use]
    pub fn new(title: &str, columns: Vec<TableColumn>) -> Self {
        Self {
            metadata: Metadata::new(ComponentKind::Table, title_from_string(title)),
            config: TableConfig {
                columns,
                ..TableConfig::default()
            },
        }
    }

    /// Create table with columns and rows
    #[must_use]
    pub fn new_with_rows(
        title: &str,
        columns: Vec<TableColumn>,
        rows: impl IntoIterator<Item = TableRow>,
    ) -> Self {
        let mut table = Self::new(title, columns);
        table.add(rows);
        table
    }

    /// With empty-table message
    #[inline]
    #[must_use]
    pub fn with_empty_content(mut self, message: impl Into<String>) -> Self {
        self.set_empty_content(message);
        self
    }

    /// Set empty-table message
    #[inline]
    pub fn set_empty_content(&mut self, message: impl Into<String>) {
        self.config.empty_content = message.into();
    }

    /// Empty-table message
    #[inline]
    #[must_use]
    pub fn empty_content(&self) -> &str {
        &self.config.empty_content
    }

    /// Check if table has no rows (columns are not counted)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.rows.is_empty()
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.config.rows.len()
    }

    /// Append rows to the tail, keeping their order
    pub fn add(&mut self, rows: impl IntoIterator<Item = TableRow>) {
        self.config.rows.extend(rows);
    }

    /// Append a column whose accessor is its name
    ///
    /// Duplicate accessors are not rejected.
    pub fn add_column(&mut self, name: impl Into<String>) {
        self.config.columns.push(TableColumn::named(name));
    }

    /// Columns, in display order
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[TableColumn] {
        &self.config.columns
    }

    /// Rows
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &TableRows {
        &self.config.rows
    }

    /// Mutable rows
    #[inline]
    pub fn rows_mut(&mut self) -> &mut TableRows {
        &mut self.config.rows
    }

    /// Sort rows by the column at `accessor`; see [`TableRows::sort`]
    #[inline]
    pub fn sort(&mut self, accessor: &str) {
        self.config.rows.sort(accessor);
    }

    /// Payload reference
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Decode a table, failing on the first bad cell
    pub(crate) fn decode(raw: RawComponent, scope: &mut DecodeScope<'_>) -> Result<Component, DecodeError> {
        let wire: RawTableConfig = scope.payload(ComponentKind::Table, raw.config)?;
        let metadata = scope.metadata(ComponentKind::Table, raw.metadata)?;

        let raw_rows = wire.rows.unwrap_or_default();
        let mut rows = TableRows(Vec::with_capacity(raw_rows.len()));
        for (index, raw_row) in raw_rows.into_iter().enumerate() {
            let mut row = TableRow::new();
            for (accessor, cell) in raw_row {
                let component = scope
                    .decode(cell)
                    .map_err(|source| DecodeError::nested(index, accessor.as_str(), source))?;
                row.insert(accessor, component);
            }
            rows.push(row);
        }

        tracing::debug!(rows = rows.len(), "decoded table");

        Ok(Component::Table(Self {
            metadata,
            config: TableConfig {
                columns: wire.columns.unwrap_or_default(),
                rows,
                empty_content: wire.empty_content.unwrap_or_default(),
            },
        }))
    }
}

impl private::Sealed for Table {}

impl View for Table {
    const KIND: ComponentKind = ComponentKind::Table;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Column names joined with `", "`
    fn projection(&self) -> String {
        self.config
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn config_value(&self) -> Value {
        let columns = self
            .config
            .columns
            .iter()
            .map(|column| {
                let mut map = Map::new();
                map.insert("name".to_string(), Value::from(column.name.as_str()));
                map.insert("accessor".to_string(), Value::from(column.accessor.as_str()));
                Value::Object(map)
            })
            .collect();
        let rows = self.config.rows.iter().map(TableRow::to_wire).collect();

        let mut map = Map::new();
        map.insert("columns".to_string(), Value::Array(columns));
        map.insert("rows".to_string(), Value::Array(rows));
        map.insert(
            "emptyContent".to_string(),
            Value::from(self.config.empty_content.as_str()),
        );
        Value::Object(map)
    }
}
