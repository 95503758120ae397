//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all dispatch handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Run each request through a Dispatcher on the blocking pool
//! - Map dispatch outcomes to responses, reporting failures

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::dispatch::{Dispatch, Dispatcher};
use crate::errors::ErrorReporter;
use crate::http::request::{request_id, UuidRequestId};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub reporter: Arc<dyn ErrorReporter>,
}

/// HTTP host for the front controller.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, dispatcher: Dispatcher, reporter: Arc<dyn ErrorReporter>) -> Self {
        let state = AppState { dispatcher, reporter };
        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(dispatch_handler))
            .route("/{*path}", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for serving or for driving directly in tests.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until a shutdown signal arrives, then drain in-flight requests.
    pub async fn run(self, listener: TcpListener, mut shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: one dispatch per request.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Dispatching request"
    );

    let dispatcher = state.dispatcher.clone();
    let uri = path.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut body = Vec::new();
        dispatcher.run(Some(uri.as_str()), &mut body).map(|outcome| (outcome, body))
    })
    .await;

    let location = format!("{method} {path} (request {request_id})");
    match result {
        Ok(Ok((Dispatch::Dispatched(target), body))) => {
            tracing::debug!(request_id = %request_id, handler = %target.identity, bytes = body.len(), "Request handled");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response()
        }
        Ok(Ok((Dispatch::NoMatch, _))) => {
            tracing::debug!(request_id = %request_id, path = %path, "No route matched");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
        Ok(Err(e)) => {
            state.reporter.report_dispatch(&e, &location);
            internal_error()
        }
        Err(e) => {
            // Panics are already reported by the process panic hook.
            if e.is_panic() {
                tracing::error!(request_id = %request_id, "Handler panicked");
            } else {
                state.reporter.report("TaskFailure", &e.to_string(), &location);
            }
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
