//! Shared types for the tally counter service.
//!
//! This crate holds the counter record and the JSON response envelope used
//! by both the storage layer and the HTTP server. No crate in the workspace
//! depends on anything *except* `tally-types` for cross-cutting type
//! definitions, which keeps the dependency graph clean.

use serde::{Deserialize, Serialize};

/// A single assigned counter row.
///
/// `number` is assigned by the storage engine on insert and is never
/// supplied by the caller. Rows are append-only: once assigned, a record is
/// never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    /// Storage-assigned number, unique and strictly increasing for the
    /// lifetime of the database file.
    pub number: i64,

    /// Caller-supplied memo, if any. Serialized as `null` when absent.
    pub memo: Option<String>,
}

/// JSON envelope returned by `POST /count/`.
///
/// The transport status is always `200 OK`; the outcome is carried in-band
/// by the `success` flag. Exactly one of `data` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Whether the insert committed.
    pub success: bool,

    /// The assigned record, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CounterRecord>,

    /// Human-readable failure message, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CountResponse {
    /// Builds the success envelope around an assigned record.
    pub fn ok(record: CounterRecord) -> Self {
        Self {
            success: true,
            data: Some(record),
            error: None,
        }
    }

    /// Builds the failure envelope with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_serializes_memo_null() {
        let resp = CountResponse::ok(CounterRecord {
            number: 7,
            memo: None,
        });
        let json = serde_json::to_value(&resp).expect("should serialize");

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["number"], 7);
        // memo must be present as an explicit null, not omitted
        assert!(json["data"].as_object().unwrap().contains_key("memo"));
        assert!(json["data"]["memo"].is_null());
        assert!(!json.as_object().unwrap().contains_key("error"));
    }

    #[test]
    fn failure_envelope_omits_data() {
        let resp = CountResponse::error("disk full");
        let json = serde_json::to_value(&resp).expect("should serialize");

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "disk full");
        assert!(!json.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn envelope_round_trips() {
        let resp = CountResponse::ok(CounterRecord {
            number: 1,
            memo: Some("hello".to_string()),
        });
        let encoded = serde_json::to_string(&resp).expect("should serialize");
        let decoded: CountResponse = serde_json::from_str(&encoded).expect("should deserialize");

        assert!(decoded.success);
        assert_eq!(decoded.data.unwrap().memo.as_deref(), Some("hello"));
        assert!(decoded.error.is_none());
    }
}
