//! The HTTP server loop.

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderName, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::api::{self, Method, Request, Response, Router};
use crate::config::ServerConfig;
use crate::error::{Error, Result};

/// Binds the configured address and serves the API until Ctrl-C.
///
/// # Errors
///
/// Returns [`Error::Bind`] when the address cannot be bound and
/// [`Error::Io`] when accepting a connection fails.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    info!("sqlscope listening on http://{}", listener.local_addr()?);

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };
    run(listener, api::router(), config.max_body_bytes, shutdown).await
}

/// Serves `router` on an already bound listener until `shutdown` completes.
///
/// # Errors
///
/// Returns [`Error::Io`] when accepting a connection fails.
pub async fn run(
    listener: TcpListener,
    router: Router,
    max_body_bytes: usize,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let router = Arc::new(router);
    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => accepted?,
            () = &mut shutdown => {
                info!("shutting down");
                return Ok(());
            }
        };
        debug!(%peer, "accepted connection");

        let io = TokioIo::new(stream);
        let router = router.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let router = router.clone();
                handle_request(req, router, max_body_bytes)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(%peer, "error serving connection: {err}");
            }
        });
    }
}

async fn handle_request(
    req: HyperRequest<Incoming>,
    router: Arc<Router>,
    max_body_bytes: usize,
) -> std::result::Result<HyperResponse<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = match Method::parse(&method) {
        Some(parsed) => match read_body(req.into_body(), max_body_bytes).await {
            Ok(body) => router.handle(&Request::new(parsed, path.as_str()).body(body)),
            Err(err) => Response::error(err.status(), err.to_string()),
        },
        None => Response::method_not_allowed(&format!("method {method} not allowed for {path}")),
    };

    info!("{method} {path} -> {}", response.status);
    Ok(into_hyper(response))
}

/// Collects the request body, refusing anything over `limit` bytes.
async fn read_body(body: Incoming, limit: usize) -> Result<Vec<u8>> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes().to_vec()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            Err(Error::PayloadTooLarge { limit })
        }
        Err(err) => Err(Error::Io(std::io::Error::other(err))),
    }
}

fn into_hyper(response: Response) -> HyperResponse<Full<Bytes>> {
    let mut hyper_response = HyperResponse::new(Full::new(Bytes::from(response.body)));
    *hyper_response.status_mut() =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    for (key, value) in response.headers {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(key), HeaderValue::try_from(value)) {
            hyper_response.headers_mut().insert(name, value);
        }
    }
    hyper_response
}
