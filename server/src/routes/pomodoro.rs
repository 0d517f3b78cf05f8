//! Pomodoro routes.

use axum::{routing::get, Json, Router};
use lifetool_core::PomodoroStatus;
use tracing::debug;

pub fn router() -> Router {
    Router::new().route("/pomodoro", get(get_pomodoro))
}

/// Always reports a paused timer at the start of a work phase. Nothing is
/// stored between calls.
async fn get_pomodoro() -> Json<PomodoroStatus> {
    let status = PomodoroStatus::default();
    debug!(time = status.time, running = status.running, "pomodoro status");
    Json(status)
}
