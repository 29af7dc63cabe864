//! Validated, ordered set of table definitions shared by the loader and the HTTP layer.

use crate::error::RegistryError;
use crate::registry::{builtin_tables, validate, TableSpec};
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    tables: Vec<TableSpec>,
    /// Position of each table in `tables`, by name.
    by_name: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Build a registry from table definitions. Order is kept: population runs in this order.
    pub fn new(tables: Vec<TableSpec>) -> Result<Self, RegistryError> {
        validate(&tables)?;
        let by_name = tables
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), i))
            .collect();
        Ok(SchemaRegistry { tables, by_name })
    }

    /// The compiled-in 5e SRD tables.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_tables())
    }

    pub fn tables(&self) -> &[TableSpec] {
        &self.tables
    }

    pub fn get(&self, name: &str) -> Option<&TableSpec> {
        self.by_name.get(name).map(|&i| &self.tables[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}
