//! Todo routes.
//!
//! No handlers are defined yet, so every request under `/todos` reaches the
//! application's not-found fallback.

use axum::Router;

pub fn router() -> Router {
    Router::new()
}
