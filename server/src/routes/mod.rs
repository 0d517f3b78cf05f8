//! Route groups merged into the application router by `crate::app`.

pub mod pomodoro;
pub mod todos;
