//! Stateless HTTP request builder and response parser for the lifetool API.
//!
//! # Design
//! `LifetoolClient` holds only a `base_url`. Each route is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Parsing happens in two steps: the body
//! must be JSON, then it must satisfy the model.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Greeting, PomodoroStatus};

/// Synchronous, stateless client for the lifetool API.
#[derive(Debug, Clone)]
pub struct LifetoolClient {
    base_url: String,
}

impl LifetoolClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_read_root(&self) -> HttpRequest {
        self.get("/")
    }

    pub fn build_get_pomodoro(&self) -> HttpRequest {
        self.get("/pomodoro")
    }

    pub fn parse_read_root(&self, response: HttpResponse) -> Result<Greeting, ApiError> {
        check_status(&response, 200)?;
        Ok(Greeting::from_value(parse_json(&response.body)?)?)
    }

    pub fn parse_get_pomodoro(&self, response: HttpResponse) -> Result<PomodoroStatus, ApiError> {
        check_status(&response, 200)?;
        Ok(PomodoroStatus::from_value(parse_json(&response.body)?)?)
    }

    fn get(&self, route: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{route}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

fn parse_json(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LifetoolClient {
        LifetoolClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_read_root_targets_root_path() {
        let req = client().build_read_root();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_get_pomodoro_targets_pomodoro_path() {
        let req = client().build_get_pomodoro();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/pomodoro");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = LifetoolClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_get_pomodoro().path, "http://localhost:3000/pomodoro");
    }

    #[test]
    fn parse_read_root_success() {
        let greeting = client()
            .parse_read_root(response(200, r#"{"Hello":"World"}"#))
            .unwrap();
        assert_eq!(greeting.hello, "World");
    }

    #[test]
    fn parse_get_pomodoro_success() {
        let status = client()
            .parse_get_pomodoro(response(200, r#"{"time":1500,"running":false}"#))
            .unwrap();
        assert_eq!(status, PomodoroStatus::default());
    }

    #[test]
    fn parse_get_pomodoro_not_found() {
        let err = client()
            .parse_get_pomodoro(response(404, r#"{"detail":"Not Found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_get_pomodoro_wrong_status() {
        let err = client()
            .parse_get_pomodoro(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_get_pomodoro_bad_json() {
        let err = client().parse_get_pomodoro(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_pomodoro_converts_string_fields() {
        let status = client()
            .parse_get_pomodoro(response(200, r#"{"time":"1500","running":"false"}"#))
            .unwrap();
        assert_eq!(status, PomodoroStatus::default());
    }

    #[test]
    fn parse_get_pomodoro_mistyped_field() {
        let err = client()
            .parse_get_pomodoro(response(200, r#"{"time":"abc","running":false}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn parse_read_root_missing_key() {
        let err = client().parse_read_root(response(200, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
