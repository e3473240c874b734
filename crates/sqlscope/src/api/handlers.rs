//! HTTP handlers.

use serde::{Deserialize, Serialize};
use sqlscope_core::{Finding, analyze_sql, format_sql};
use tracing::debug;

use super::request::Request;
use super::response::Response;
use crate::error::{Error, Result};

/// Body of `POST /api/format`.
#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    #[serde(default)]
    pub sql: Option<String>,
}

/// Successful reply to `POST /api/format`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResponse {
    pub formatted: String,
    pub findings: Vec<Finding>,
}

/// `POST /api/format`: formats and analyzes the posted SQL.
pub fn format(request: &Request) -> Response {
    match format_request(request) {
        Ok(reply) => Response::json(&reply),
        Err(err) => {
            debug!("rejected format request: {err}");
            Response::error(err.status(), err.to_string())
        }
    }
}

fn format_request(request: &Request) -> Result<FormatResponse> {
    let body: FormatRequest = request.json()?;
    let sql = body.sql.ok_or(Error::MissingSql)?;
    if sql.trim().is_empty() {
        return Err(Error::EmptySql);
    }
    Ok(FormatResponse {
        formatted: format_sql(&sql),
        findings: analyze_sql(&sql),
    })
}

/// `GET /health`.
pub fn health(_request: &Request) -> Response {
    Response::json(&serde_json::json!({ "status": "ok" }))
}
