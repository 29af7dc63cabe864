//! Table definitions: one per reference-data table.

use crate::naming::column_name;
use serde::Serialize;

/// Declarative schema for one table: its name, ordered field list, and fixture file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: String,
    /// Field names as they appear in the fixture, in column order.
    pub fields: Vec<String>,
    /// Fixture file name, relative to the fixture directory.
    pub source_file: String,
}

impl TableSpec {
    pub fn new(name: &str, source_file: &str, fields: &[&str]) -> Self {
        TableSpec {
            name: name.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            source_file: source_file.to_string(),
        }
    }

    /// Storage column names in field order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| column_name(f))
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}
