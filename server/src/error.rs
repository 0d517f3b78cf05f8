//! Error responses.
//!
//! Routing errors render as `{"detail": "..."}`. Validation errors render
//! `detail` as a list of `{"type", "loc", "msg"}` entries, one per failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lifetool_core::ValidationError;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn detail(&self) -> Value {
        match self {
            ApiError::NotFound | ApiError::MethodNotAllowed => Value::String(self.to_string()),
            // serde reports the first failure only, without a field path.
            ApiError::Validation(err) => json!([{
                "type": "value_error",
                "loc": ["body"],
                "msg": err.message(),
            }]),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Validation(err) = &self {
            warn!(detail = err.message(), "rejected invalid payload");
        }
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use lifetool_core::Todo;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_detail() {
        let (status, body) = render(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Not Found"}));
    }

    #[tokio::test]
    async fn method_not_allowed_renders_detail() {
        let (status, body) = render(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"detail": "Method Not Allowed"}));
    }

    #[tokio::test]
    async fn validation_error_renders_422() {
        let err = Todo::from_value(json!({"id": 1, "text": "a"})).unwrap_err();
        let (status, body) = render(ApiError::from(err)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let entries = body["detail"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["type"], "value_error");
        assert_eq!(entries[0]["loc"], json!(["body"]));
        let msg = entries[0]["msg"].as_str().unwrap();
        assert!(msg.contains("missing field `done`"), "unexpected msg: {msg}");
    }
}
