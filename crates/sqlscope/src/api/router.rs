//! Exact-path request routing.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::request::{Method, Request};
use super::response::Response;

/// A boxed handler function.
pub(crate) type Handler = Arc<dyn Fn(&Request) -> Response + Send + Sync>;

/// Why a request matched no route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No route has this path.
    #[error("no route for {path}")]
    NotFound { path: String },

    /// The path exists but not for this method.
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: Method, path: String },
}

/// A single route definition.
#[derive(Clone)]
pub(crate) struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

impl Route {
    /// Creates a new route.
    fn new<F>(method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self {
            method,
            path: path.to_string(),
            handler: Arc::new(handler),
        }
    }
}

/// Dispatches requests to handlers by method and path.
#[derive(Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a GET route.
    #[must_use]
    pub fn get<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.route(Method::Get, path, handler)
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.route(Method::Post, path, handler)
    }

    /// Adds a route with any method.
    #[must_use]
    pub fn route<F>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.routes.push(Route::new(method, path, handler));
        self
    }

    /// Handles a request. Unmatched requests get a JSON 404 or 405.
    #[must_use]
    pub fn handle(&self, request: &Request) -> Response {
        match self.find_route(request) {
            Ok(route) => (route.handler)(request),
            Err(err) => {
                debug!(method = %request.method, path = %request.path, "{err}");
                match err {
                    RouteError::NotFound { .. } => Response::not_found(&err.to_string()),
                    RouteError::MethodNotAllowed { .. } => {
                        Response::method_not_allowed(&err.to_string())
                    }
                }
            }
        }
    }

    /// Finds the route for the request's method and path.
    fn find_route(&self, request: &Request) -> Result<&Route, RouteError> {
        let mut path_matched = false;

        for route in &self.routes {
            if route.path == request.path {
                path_matched = true;
                if route.method == request.method {
                    return Ok(route);
                }
            }
        }

        if path_matched {
            Err(RouteError::MethodNotAllowed {
                method: request.method,
                path: request.path.clone(),
            })
        } else {
            Err(RouteError::NotFound {
                path: request.path.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello(_req: &Request) -> Response {
        Response::json(&"hello")
    }

    #[test]
    fn test_basic_routing() {
        let router = Router::new().get("/", hello);
        let res = router.handle(&Request::get("/"));
        assert_eq!(res.status, 200);
        assert_eq!(res.body_string(), Some("\"hello\"".to_string()));
    }

    #[test]
    fn test_not_found() {
        let router = Router::new().get("/", hello);
        let res = router.handle(&Request::get("/nonexistent"));
        assert_eq!(res.status, 404);
        assert!(res.body_string().unwrap().contains("no route for /nonexistent"));
    }

    #[test]
    fn test_method_not_allowed() {
        let router = Router::new().get("/", hello);
        let res = router.handle(&Request::post("/"));
        assert_eq!(res.status, 405);
        assert!(res.body_string().unwrap().contains("method POST not allowed"));
    }

    #[test]
    fn test_same_path_different_methods() {
        let router = Router::new()
            .get("/x", |_| Response::new(200))
            .post("/x", |_| Response::new(201));
        assert_eq!(router.handle(&Request::get("/x")).status, 200);
        assert_eq!(router.handle(&Request::post("/x")).status, 201);
    }

    #[test]
    fn test_paths_match_exactly() {
        let router = Router::new().get("/health", hello);
        assert_eq!(router.handle(&Request::get("/health/")).status, 404);
    }
}
