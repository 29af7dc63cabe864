//! Registry validation: identifier safety and uniqueness of tables, fields, and columns.

use crate::error::RegistryError;
use crate::naming::field_name;
use crate::registry::TableSpec;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn table_ident() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]{0,62}$").expect("static regex"))
}

fn field_ident() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").expect("static regex"))
}

/// Lowercase SQL identifier, optionally with a leading underscore. Also used for schema names.
pub(crate) fn is_identifier(name: &str) -> bool {
    field_ident().is_match(name)
}

/// Table and field names end up as SQL identifiers, so only lowercase ASCII identifiers are accepted.
pub fn validate(tables: &[TableSpec]) -> Result<(), RegistryError> {
    let mut table_names = HashSet::new();
    for t in tables {
        if !table_ident().is_match(&t.name) {
            return Err(RegistryError::InvalidIdentifier {
                kind: "table",
                name: t.name.clone(),
            });
        }
        if !table_names.insert(t.name.as_str()) {
            return Err(RegistryError::DuplicateTable(t.name.clone()));
        }
        validate_fields(t)?;
    }
    Ok(())
}

fn validate_fields(t: &TableSpec) -> Result<(), RegistryError> {
    if t.fields.is_empty() {
        return Err(RegistryError::EmptyFields(t.name.clone()));
    }
    let mut fields = HashSet::new();
    for f in &t.fields {
        if !is_identifier(f) {
            return Err(RegistryError::InvalidIdentifier {
                kind: "field",
                name: format!("{}.{}", t.name, f),
            });
        }
        // A literal "_index" would be reported back as "index" and could share its column.
        if field_name(f) != f {
            return Err(RegistryError::ReservedField {
                table: t.name.clone(),
                field: f.clone(),
            });
        }
        if !fields.insert(f.as_str()) {
            return Err(RegistryError::DuplicateField {
                table: t.name.clone(),
                field: f.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, fields: &[&str]) -> TableSpec {
        TableSpec::new(name, "fixture.json", fields)
    }

    #[test]
    fn accepts_well_formed_tables() {
        let tables = vec![
            spec("conditions", &["index", "name", "desc", "url"]),
            spec("damage_types", &["index", "name", "desc", "url"]),
        ];
        assert!(validate(&tables).is_ok());
    }

    #[test]
    fn rejects_empty_field_list() {
        let err = validate(&[spec("conditions", &[])]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyFields(t) if t == "conditions"));
    }

    #[test]
    fn rejects_duplicate_field() {
        let err = validate(&[spec("conditions", &["name", "url", "name"])]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateField { field, .. } if field == "name"));
    }

    #[test]
    fn rejects_renamed_column_names_as_fields() {
        for fields in [&["index", "_index"][..], &["_desc"][..], &["name", "_index"][..]] {
            let err = validate(&[spec("conditions", fields)]).unwrap_err();
            assert!(matches!(err, RegistryError::ReservedField { .. }), "{fields:?}");
        }
        // Other leading underscores survive the round trip and stay allowed.
        assert!(validate(&[spec("conditions", &["index", "_source"])]).is_ok());
    }

    #[test]
    fn rejects_duplicate_table() {
        let tables = vec![spec("skills", &["name"]), spec("skills", &["name"])];
        let err = validate(&tables).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTable(t) if t == "skills"));
    }

    #[test]
    fn rejects_unsafe_identifiers() {
        for bad in ["Skills", "skills; drop table x", "magic-items", "", "_hidden"] {
            let err = validate(&[spec(bad, &["name"])]).unwrap_err();
            assert!(matches!(err, RegistryError::InvalidIdentifier { kind: "table", .. }), "{bad}");
        }
        let err = validate(&[spec("skills", &["name", "bad\"field"])]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidIdentifier { kind: "field", .. }));
    }
}
