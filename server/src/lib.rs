//! HTTP backend for lifetool: a root health check plus the todos and
//! pomodoro route groups.
//!
//! `app()` builds the router without binding anything, so tests can drive it
//! in-process; `run()` serves it on a listener the caller already bound.

use axum::{
    http::{Method, Uri},
    routing::get,
    Json, Router,
};
use lifetool_core::Greeting;
use tokio::net::TcpListener;
use tracing::debug;

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use error::ApiError;

pub fn app() -> Router {
    Router::new()
        .route("/", get(read_root))
        .merge(routes::todos::router())
        .merge(routes::pomodoro::router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn read_root() -> Json<Greeting> {
    debug!("health check");
    Json(Greeting::default())
}

async fn not_found(uri: Uri) -> ApiError {
    debug!(%uri, "no route matched");
    ApiError::NotFound
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "method not allowed");
    ApiError::MethodNotAllowed
}
