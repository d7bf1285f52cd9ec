//! API handlers for the tally server.

use crate::AppState;
use axum::{body::Bytes, extract::Extension, Json};
use serde_json::Value;
use std::sync::Arc;
use tally_db::insert_count;
use tally_types::CountResponse;

/// Handler for `POST /count/`.
///
/// The body is read raw rather than through the `Json` extractor: an absent
/// or malformed body is treated as an empty object, never rejected with a
/// 400. Past that point the outcome is reported in-band — the response
/// status is always `200 OK` and the `success` flag distinguishes a
/// committed insert from a storage failure.
pub async fn count_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Json<CountResponse> {
    let memo = extract_memo(&body);

    // rusqlite is synchronous; keep the insert off the async executor.
    let result = tokio::task::spawn_blocking(move || {
        let conn = state
            .pool
            .get()
            .map_err(|e| format!("db connection failed: {e}"))?;
        insert_count(&conn, memo.as_deref()).map_err(|e| e.to_string())
    })
    .await
    .unwrap_or_else(|e| Err(format!("task join error: {e}")));

    match result {
        Ok(record) => Json(CountResponse::ok(record)),
        Err(message) => {
            tracing::warn!(error = %message, "counter insert failed");
            Json(CountResponse::error(message))
        }
    }
}

/// Extracts the memo from a raw request body.
///
/// Malformed JSON and an empty body are both treated as an empty object.
/// Only a JSON string is kept as the memo; `null`, an absent key, a
/// non-object body, and any other JSON type all map to `None`.
fn extract_memo(body: &[u8]) -> Option<String> {
    let parsed: Value =
        serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Default::default()));

    match parsed.get("memo") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            tracing::debug!("ignoring non-string memo value");
            None
        }
    }
}
