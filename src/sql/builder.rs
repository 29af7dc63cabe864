//! Builds CREATE TABLE, INSERT, and SELECT text from a table definition.
//! Identifiers come only from the registry; values are always bound parameters.

use crate::registry::TableSpec;

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

fn column_list(spec: &TableSpec) -> String {
    spec.columns().map(quoted).collect::<Vec<_>>().join(", ")
}

/// One TEXT column per field, in field order.
pub fn create_table(spec: &TableSpec, schema: &str) -> String {
    let col_defs: Vec<String> = spec.columns().map(|c| format!("{} TEXT", quoted(c))).collect();
    format!(
        "CREATE TABLE {} ({})",
        qualified_table(schema, &spec.name),
        col_defs.join(", ")
    )
}

/// INSERT of every column with placeholders $1..$n in field order.
pub fn insert(spec: &TableSpec, schema: &str) -> String {
    let placeholders: Vec<String> = (1..=spec.fields.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        qualified_table(schema, &spec.name),
        column_list(spec),
        placeholders.join(", ")
    )
}

/// Every row, all columns.
pub fn select_all(spec: &TableSpec, schema: &str) -> String {
    format!(
        "SELECT {} FROM {}",
        column_list(spec),
        qualified_table(schema, &spec.name)
    )
}

/// Rows whose name column equals $1.
pub fn select_by_name(spec: &TableSpec, schema: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(spec),
        qualified_table(schema, &spec.name),
        quoted("name")
    )
}

/// The name column of every row.
pub fn select_names(spec: &TableSpec, schema: &str) -> String {
    format!(
        "SELECT {} FROM {}",
        quoted("name"),
        qualified_table(schema, &spec.name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon_properties() -> TableSpec {
        TableSpec::new(
            "weapon_properties",
            "5e-SRD-Weapon-Properties.json",
            &["index", "name", "desc", "url"],
        )
    }

    #[test]
    fn create_table_uses_renamed_text_columns() {
        assert_eq!(
            create_table(&weapon_properties(), "public"),
            r#"CREATE TABLE "public"."weapon_properties" ("_index" TEXT, "name" TEXT, "_desc" TEXT, "url" TEXT)"#
        );
    }

    #[test]
    fn insert_binds_one_placeholder_per_field() {
        assert_eq!(
            insert(&weapon_properties(), "srd"),
            r#"INSERT INTO "srd"."weapon_properties" ("_index", "name", "_desc", "url") VALUES ($1, $2, $3, $4)"#
        );
    }

    #[test]
    fn selects_project_registry_columns() {
        let spec = weapon_properties();
        assert_eq!(
            select_by_name(&spec, "public"),
            r#"SELECT "_index", "name", "_desc", "url" FROM "public"."weapon_properties" WHERE "name" = $1"#
        );
        assert_eq!(
            select_names(&spec, "public"),
            r#"SELECT "name" FROM "public"."weapon_properties""#
        );
        assert!(select_all(&spec, "public").starts_with(r#"SELECT "_index""#));
    }

    #[test]
    fn quoting_doubles_embedded_quotes() {
        assert_eq!(quoted(r#"a"b"#), r#""a""b""#);
    }
}
