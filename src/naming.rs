//! Field name <-> column name mapping. `index` and `desc` are reserved words in PostgreSQL,
//! so they are stored as `_index` and `_desc`; every other field name is used as-is.

/// Storage column name for a fixture field name.
/// e.g. "index" -> "_index", "desc" -> "_desc", "name" -> "name"
pub fn column_name(field: &str) -> &str {
    match field {
        "index" => "_index",
        "desc" => "_desc",
        other => other,
    }
}

/// Fixture field name for a storage column name. Inverse of [`column_name`].
pub fn field_name(column: &str) -> &str {
    match column {
        "_index" => "index",
        "_desc" => "desc",
        other => other,
    }
}
