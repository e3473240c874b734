//! Tests for the HTTP API routes.

mod common;
use common::*;

use sqlscope::api::{Request, router};

#[test]
fn valid_sql_returns_formatted_text_and_findings() {
    let res = post_sql("select * from t where x like '%abc'");
    assert_eq!(res.status, 200);

    let body = json(&res);
    assert_eq!(body["formatted"], "SELECT\n  *\nFROM t\nWHERE x LIKE '%abc'\n");
    let findings = body["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().all(|f| f["level"] == "warn"));
}

#[test]
fn clean_sql_has_empty_findings() {
    let body = json(&post_sql("select id from t where id = 1"));
    assert_eq!(body["findings"], serde_json::json!([]));
}

#[test]
fn malformed_sql_is_not_an_error() {
    let res = post_sql(")) select from (( where");
    assert_eq!(res.status, 200);
}

#[test]
fn empty_or_missing_sql_is_rejected() {
    for body in [r#"{}"#, r#"{"sql": ""}"#, r#"{"sql": "   "}"#, r#"{"sql": null}"#] {
        let res = post_format(body);
        assert_eq!(res.status, 400, "{body}");
        assert!(json(&res)["error"].is_string(), "{body}");
    }
}

#[test]
fn non_json_body_is_rejected() {
    for body in ["", "sql=select 1", "[1, 2]", r#"{"sql": ["select 1"]}"#] {
        let res = post_format(body);
        assert_eq!(res.status, 400, "{body}");
        assert!(json(&res)["error"].is_string(), "{body}");
    }
}

#[test]
fn health_check() {
    let res = router().handle(&Request::get("/health"));
    assert_eq!(res.status, 200);
    assert_eq!(json(&res)["status"], "ok");
}

#[test]
fn unknown_path_and_wrong_method() {
    let res = router().handle(&Request::get("/api/nope"));
    assert_eq!(res.status, 404);
    assert!(json(&res)["error"].is_string());

    let res = router().handle(&Request::get("/api/format"));
    assert_eq!(res.status, 405);
    assert!(json(&res)["error"].is_string());
}
