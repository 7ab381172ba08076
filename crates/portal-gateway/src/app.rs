use std::any::Any;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{error, Level};

use crate::error::AppError;
use crate::handlers::{pong_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router with its middleware stack.
    pub fn router(state: AppState, request_timeout: Duration) -> Router {
        let routes = Router::new()
            .route("/pong", get(pong_handler))
            .route("/shorten", post(shorten_handler))
            .route("/go/{key}", get(redirect_handler))
            .with_state(state);

        Self::with_middleware(routes, request_timeout)
    }

    /// Wraps `routes` in request tracing, panic recovery and a request timeout.
    ///
    /// Layers run outermost first: trace, then panic recovery, then timeout.
    pub fn with_middleware(routes: Router, request_timeout: Duration) -> Router {
        routes
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            ))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
    }
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "panic recovered");
    AppError::Internal.into_response()
}
