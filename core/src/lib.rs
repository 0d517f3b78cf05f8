//! Models and a synchronous API client core for the lifetool backend.
//!
//! # Overview
//! `Todo` and `Pomodoro` are flat value types validated on construction.
//! `LifetoolClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; the caller executes the round-trip.
//!
//! # Design
//! - Models convert loosely typed values (`"1500"`, `1500.0`, `0`) the way a
//!   form or query string would send them; a missing field or a value that
//!   cannot convert without loss is a `ValidationError`.
//! - `LifetoolClient` is stateless and holds only `base_url`.
//! - The server crate depends on these types directly, so the wire schema
//!   lives in one place.

pub mod client;
pub mod error;
pub mod http;
mod lax;
pub mod types;

pub use client::LifetoolClient;
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Greeting, Pomodoro, PomodoroStatus, Todo, WORK_DURATION_SECS};
