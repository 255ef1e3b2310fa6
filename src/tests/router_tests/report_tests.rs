// src/tests/router_tests/report_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{
    body_string, from_htmx, mot_payload, post, test_config, valuation_payload,
};

const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

#[test]
fn mot_report_from_json_body() {
    let req = post("/report/mot", JSON, mot_payload().to_string());
    let resp = handle(req, &test_config()).unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.contains("MOT History"));
    assert!(body.contains("AB12CDE"));
}

#[test]
fn mot_report_from_form_field() {
    let form: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("payload", &mot_payload().to_string())
        .finish();

    let resp = handle(post("/report/mot", FORM, form), &test_config()).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("FORD FOCUS"));
}

#[test]
fn form_without_payload_field_is_bad_request() {
    let err = handle(post("/report/mot", FORM, "other=1"), &test_config())
        .err()
        .expect("request should fail");
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn empty_history_renders_notice_not_error() {
    let body = r#"{"registration":"AB12CDE","data":{"motTests":[]}}"#;
    let resp = handle(post("/report/mot", JSON, body), &test_config()).unwrap();

    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("error-card"));
    assert!(html.contains("No MOT history found for this vehicle"));
}

#[test]
fn malformed_json_is_bad_request_page() {
    let resp = respond(post("/report/valuation", JSON, "{"), &test_config());

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Malformed payload"));
}

#[test]
fn valuation_report_renders() {
    let req = post("/report/valuation", JSON, valuation_payload().to_string());
    let resp = handle(req, &test_config()).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Acceptable with Caution"));
}

#[test]
fn oversized_body_is_rejected() {
    let mut cfg = test_config();
    cfg.max_body_bytes = 16;

    let err = handle(post("/report/mot", JSON, mot_payload().to_string()), &cfg)
        .err()
        .expect("request should fail");
    assert!(matches!(err, ServerError::PayloadTooLarge(16)));
    assert_eq!(err.status(), 413);
}

#[test]
fn htmx_malformed_payload_gets_error_card_fragment() {
    let req = from_htmx(post("/report/valuation", FORM, "payload=%7B"));
    let resp = respond(req, &test_config());

    // htmx only swaps 2xx responses into the target.
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("error-card"));
    assert!(html.contains("Malformed payload"));
}

#[test]
fn htmx_report_is_a_bare_fragment() {
    let req = from_htmx(post("/report/mot", JSON, mot_payload().to_string()));
    let html = body_string(handle(req, &test_config()).unwrap());

    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.starts_with(r#"<div class="result-card">"#));
}

#[test]
fn plain_form_post_gets_full_page() {
    let req = post("/report/valuation", JSON, valuation_payload().to_string());
    let html = body_string(handle(req, &test_config()).unwrap());

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Acceptable with Caution"));
}
