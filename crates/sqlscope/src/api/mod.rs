//! The HTTP API: request/response types, routing and handlers.

mod handlers;
mod request;
mod response;
mod router;

pub use handlers::{FormatRequest, FormatResponse};
pub use request::{Method, Request};
pub use response::Response;
pub use router::{RouteError, Router};

/// Builds the service router.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .post("/api/format", handlers::format)
        .get("/health", handlers::health)
}
