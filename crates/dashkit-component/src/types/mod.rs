//! Component variant implementations
//!
//! Provides the concrete components:
//! - Text: Plain or markdown text
//! - Link: Display text with a reference
//! - Table: Columns and rows of nested components

pub mod link;
pub mod table;
pub mod text;

// Re-export common types
pub use link::{Link, LinkConfig};
pub use table::{columns_from_keys, Table, TableColumn, TableConfig, TableRow, TableRows};
pub use text::{Text, TextConfig};
