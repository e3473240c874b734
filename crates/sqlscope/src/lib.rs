//! # sqlscope
//!
//! Service surfaces for [`sqlscope_core`]: a command-line tool and a small
//! JSON-over-HTTP API.
//!
//! The HTTP API has two routes:
//!
//! - `POST /api/format` takes `{"sql": "..."}` and answers
//!   `{"formatted": "...", "findings": [...]}`, or `{"error": "..."}` with
//!   status 400 for a missing or empty `sql` field or a malformed body.
//! - `GET /health` answers `{"status": "ok"}`.
//!
//! ```rust
//! use sqlscope::api::{Request, router};
//!
//! let router = router();
//! let response = router.handle(&Request::post("/api/format").body(r#"{"sql":"select 1"}"#));
//! assert_eq!(response.status, 200);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
