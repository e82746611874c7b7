//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
fn service_unavailable_constructor_sets_code() {
    let err = Error::service_unavailable("offline");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(err.to_string(), "offline");
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::service_unavailable("offline")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "service_unavailable", "message": "offline" })
    );
}

#[rstest]
fn serialises_trace_id(expected_trace_id: String) {
    let error = Error::internal("boom").with_trace_id(expected_trace_id.clone());
    let value = serde_json::to_value(error).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "internal_error", "message": "boom", "traceId": expected_trace_id })
    );
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<Error>(json!({ "code": "internal_error", "message": "boom" }))
            .expect("valid payload")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn deserialising_accepts_snake_case_trace_id() {
    let error: Error = serde_json::from_value(json!({
        "code": "internal_error",
        "message": "boom",
        "trace_id": "abc"
    }))
    .expect("valid payload");
    assert_eq!(error.trace_id(), Some("abc"));
}
