use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;

use super::*;

/// Tests each error kind renders the name used in alert subjects and logs.
///
/// Expected: FooError, BarError, BizzError
#[test]
fn kind_names_match_demo_errors() {
    assert_eq!(ErrorKind::Foo.name(), "FooError");
    assert_eq!(ErrorKind::Bar.name(), "BarError");
    assert_eq!(ErrorKind::Bizz.name(), "BizzError");
}

/// Tests the error display includes both kind and message.
///
/// Expected: "FooError: disk full"
#[test]
fn display_includes_kind_and_message() {
    let error = ServiceError::new(ErrorKind::Foo, "disk full");
    assert_eq!(error.to_string(), "FooError: disk full");
}

/// Tests the HTTP mapping returns a generic 500 without internal detail.
///
/// The response body must never contain the error's message; the original
/// error must instead be available from the response extensions for the
/// alert middleware.
///
/// Expected: 500, generic JSON body, error preserved in extensions
#[tokio::test]
async fn error_response_is_generic_and_carries_error() {
    let error = ServiceError::new(ErrorKind::Bar, "secret internal detail");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let stashed = response
        .extensions()
        .get::<ServiceError>()
        .expect("error should be stashed in extensions");
    assert_eq!(stashed.kind(), ErrorKind::Bar);
    assert_eq!(stashed.message(), "secret internal detail");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("secret"));

    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["error"], "Something went wrong");
}
