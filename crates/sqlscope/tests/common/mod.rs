#![allow(dead_code)]

use sqlscope::api::{Request, Response, router};

pub fn post_format(body: &str) -> Response {
    router().handle(&Request::post("/api/format").body(body))
}

pub fn post_sql(sql: &str) -> Response {
    post_format(&serde_json::json!({ "sql": sql }).to_string())
}

pub fn json(response: &Response) -> serde_json::Value {
    serde_json::from_slice(&response.body).expect("response body is JSON")
}
