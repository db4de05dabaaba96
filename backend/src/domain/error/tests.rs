//! Tests for the domain error constructors.

use super::*;
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[case(Error::invalid_request("Bad request"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("Task t1 does not exist"), ErrorCode::NotFound)]
#[case(Error::method_not_allowed("Method not allowed"), ErrorCode::MethodNotAllowed)]
#[case(Error::conflict("Username already exists"), ErrorCode::Conflict)]
#[case(Error::internal("Error creating user"), ErrorCode::InternalError)]
#[case(Error::not_implemented("Updating task t1 is not implemented"), ErrorCode::NotImplemented)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::NotFound, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
#[should_panic(expected = "error messages must satisfy validation")]
fn new_panics_on_blank_message() {
    let _ = Error::new(ErrorCode::InternalError, " ");
}

#[rstest]
fn display_includes_code_and_message() {
    let err = Error::conflict("Task name already exists");
    assert_eq!(err.to_string(), "conflict: Task name already exists");
}

#[rstest]
fn trace_id_is_absent_outside_a_request() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_from_scope() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let err = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(err.trace_id(), Some(Uuid::nil().to_string().as_str()));
}

#[rstest]
fn with_trace_id_overrides_captured_value() {
    let err = Error::internal("boom").with_trace_id("abc");
    assert_eq!(err.trace_id(), Some("abc"));
}
