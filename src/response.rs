//! Response helpers: newline-delimited JSON streaming.

use crate::error::AppError;
use crate::service::RowReceiver;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::{stream, StreamExt};
use serde_json::Value;
use tokio_stream::wrappers::ReceiverStream;

pub const NDJSON: &str = "application/x-ndjson";

fn ndjson_line(v: Value) -> String {
    let mut line = v.to_string();
    line.push('\n');
    line
}

/// Stream rows as one JSON object per line. The first row is awaited before the status
/// is chosen: no rows gives 204, an error before any row gives the error response.
/// An error after the first row ends the body early.
pub async fn ndjson(mut rx: RowReceiver) -> Result<Response, AppError> {
    let first = match rx.recv().await {
        None => return Ok(StatusCode::NO_CONTENT.into_response()),
        Some(Err(e)) => return Err(AppError::Db(e)),
        Some(Ok(row)) => row,
    };
    let rows = stream::once(async move { Ok(first) })
        .chain(ReceiverStream::new(rx))
        .map(|item| item.map(ndjson_line));
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, NDJSON)],
        Body::from_stream(rows),
    )
        .into_response())
}
