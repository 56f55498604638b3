//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_absent_outside_request_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_inside_scope() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let error = TraceId::scope(trace_id, async { Error::service_unavailable("missing") }).await;
    assert_eq!(
        error.trace_id(),
        Some("00000000-0000-0000-0000-000000000000")
    );
}

#[rstest]
fn serialises_with_camel_case_keys() {
    let error = Error::invalid_request("bad id")
        .with_trace_id("abc")
        .with_details(json!({ "field": "id" }));
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad id",
            "traceId": "abc",
            "details": { "field": "id" },
        })
    );
}

#[rstest]
fn omits_empty_optional_fields() {
    let value = serde_json::to_value(Error::internal("boom")).expect("serialise error");
    assert_eq!(value, json!({ "code": "internal_error", "message": "boom" }));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::internal("boom").to_string(), "boom");
}
