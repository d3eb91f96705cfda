//! Validation and trace capture for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("login required"), ErrorCode::Unauthorized)]
#[case(Error::not_found("no profile"), ErrorCode::NotFound)]
#[case(Error::conflict("exists"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("store down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] code: ErrorCode) {
    assert_eq!(error.code(), code);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::NotFound, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::not_found("missing").try_with_trace_id(" ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn trace_id_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_captured_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let error = TraceId::scope(trace_id, async { Error::service_unavailable("store down") }).await;
    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let error = TraceId::scope(trace_id, async {
        serde_json::from_value::<Error>(json!({"code": "not_found", "message": "missing"}))
            .expect("payload is valid")
    })
    .await;
    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_camel_case_envelope(expected_trace_id: String) {
    let error = Error::invalid_request("bad skill")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "teachSkills"}));
    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad skill",
            "traceId": expected_trace_id,
            "details": {"field": "teachSkills"},
        })
    );
}

#[rstest]
fn deserialising_rejects_blank_message() {
    let result = serde_json::from_value::<Error>(json!({"code": "not_found", "message": ""}));
    assert!(result.is_err());
}

#[given("a profile lookup that found nothing")]
fn a_profile_lookup_that_found_nothing() -> (ErrorCode, String) {
    (ErrorCode::NotFound, "profile not found".to_owned())
}

#[when("the error is constructed")]
fn the_error_is_constructed(payload: (ErrorCode, String)) -> Result<Error, ErrorValidationError> {
    Error::try_new(payload.0, payload.1)
}

#[then("the error reports it as not found")]
fn the_error_reports_it_as_not_found(result: Result<Error, ErrorValidationError>) {
    let error = result.expect("construction succeeds");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.to_string(), "profile not found");
}

#[rstest]
fn constructing_a_not_found_error() {
    let payload = a_profile_lookup_that_found_nothing();
    let result = the_error_is_constructed(payload);
    the_error_reports_it_as_not_found(result);
}
