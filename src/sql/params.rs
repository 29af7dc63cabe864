//! Convert fixture values to the text bound into `TEXT` columns.

use crate::registry::TableSpec;
use serde_json::{Map, Value};

/// Text stored for one JSON value. `None` binds as SQL NULL.
/// Strings are stored verbatim; numbers, booleans, arrays, and objects as compact JSON text.
pub fn column_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Values for one record in the table's field order; absent fields bind as NULL.
pub fn row_values(spec: &TableSpec, record: &Map<String, Value>) -> Vec<Option<String>> {
    spec.fields
        .iter()
        .map(|f| record.get(f).and_then(column_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_stored_verbatim() {
        assert_eq!(column_text(&json!("it's a trap")), Some("it's a trap".to_string()));
    }

    #[test]
    fn null_becomes_sql_null() {
        assert_eq!(column_text(&Value::Null), None);
    }

    #[test]
    fn non_strings_are_stored_as_json_text() {
        assert_eq!(column_text(&json!(12)), Some("12".into()));
        assert_eq!(column_text(&json!(0.25)), Some("0.25".into()));
        assert_eq!(column_text(&json!(true)), Some("true".into()));
        let nested = column_text(&json!([{"index": "a"}])).unwrap();
        assert_eq!(nested, r#"[{"index":"a"}]"#);
        let back: Value = serde_json::from_str(&nested).unwrap();
        assert_eq!(back, json!([{"index": "a"}]));
    }

    #[test]
    fn row_values_follow_field_order_with_nulls() {
        let spec = TableSpec::new("skills", "skills.json", &["index", "name", "desc", "ability_score", "url"]);
        let rec = json!({
            "url": "/api/skills/acrobatics",
            "index": "acrobatics",
            "name": "Acrobatics",
            "desc": null
        });
        let values = row_values(&spec, rec.as_object().unwrap());
        assert_eq!(
            values,
            vec![
                Some("acrobatics".to_string()),
                Some("Acrobatics".to_string()),
                None,
                None,
                Some("/api/skills/acrobatics".to_string()),
            ]
        );
    }
}
