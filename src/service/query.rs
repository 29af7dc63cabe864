//! Read-only queries against populated tables.

use crate::naming::field_name;
use crate::registry::TableSpec;
use crate::sql::{select_all, select_by_name, select_names};
use futures_util::StreamExt;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use tokio::sync::mpsc;

/// Rows buffered between the database task and the response body.
const STREAM_BUFFER: usize = 64;

pub type RowReceiver = mpsc::Receiver<Result<Value, sqlx::Error>>;

pub struct QueryService;

impl QueryService {
    /// The row whose name column equals `name`, keyed by field names. None if absent.
    pub async fn read_by_name(
        pool: &PgPool,
        spec: &TableSpec,
        schema: &str,
        name: &str,
    ) -> Result<Option<Value>, sqlx::Error> {
        let sql = select_by_name(spec, schema);
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query(&sql).bind(name).fetch_optional(pool).await?;
        row.map(|r| row_to_json(&r)).transpose()
    }

    /// Every row of the table, streamed.
    pub fn stream_all(pool: &PgPool, spec: &TableSpec, schema: &str) -> RowReceiver {
        Self::stream(pool.clone(), select_all(spec, schema))
    }

    /// `{"name": ...}` for every row of the table, streamed.
    pub fn stream_names(pool: &PgPool, spec: &TableSpec, schema: &str) -> RowReceiver {
        Self::stream(pool.clone(), select_names(spec, schema))
    }

    /// Run `sql` on a spawned task and forward rows as they arrive. The task stops at the
    /// first error (which is forwarded) or when the receiver is dropped.
    fn stream(pool: PgPool, sql: String) -> RowReceiver {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(async move {
            tracing::debug!(sql = %sql, "stream query");
            let mut rows = sqlx::query(&sql).fetch(&pool);
            while let Some(next) = rows.next().await {
                let item = next.and_then(|r| row_to_json(&r));
                let failed = item.is_err();
                if tx.send(item).await.is_err() || failed {
                    break;
                }
            }
        });
        rx
    }
}

/// All columns are TEXT; NULL becomes JSON null and column names are mapped back to field names.
/// A column that cannot be read as text fails the whole row.
fn row_to_json(row: &PgRow) -> Result<Value, sqlx::Error> {
    use sqlx::{Column, Row};
    let mut map = serde_json::Map::new();
    for (i, col) in row.columns().iter().enumerate() {
        let v = match row.try_get::<Option<String>, _>(i)? {
            Some(s) => Value::String(s),
            None => Value::Null,
        };
        map.insert(field_name(col.name()).to_string(), v);
    }
    Ok(Value::Object(map))
}
