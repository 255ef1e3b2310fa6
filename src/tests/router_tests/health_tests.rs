// src/tests/router_tests/health_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_config};

#[test]
fn health_says_ok() {
    let resp = handle(get("/health"), &test_config()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn home_page_has_both_forms() {
    let resp = handle(get("/"), &test_config()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/report/mot""#));
    assert!(body.contains(r#"action="/report/valuation""#));
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(get("/nope"), &test_config())
        .err()
        .expect("request should fail");
    assert_eq!(err.status(), 404);
}
