use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::types::api_response::ApiResponse;

/// Failure rendered as the `{data, error}` envelope.
///
/// `data` is whatever the endpoint returns in place of a result: `[]` for list
/// endpoints, `null` otherwise.
#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
    pub data: Value,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ApiResponse {
                data: self.data,
                error: Some(self.message),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_renders_envelope() {
        let response = AppError::new(StatusCode::BAD_REQUEST, "Nope")
            .with_data(json!([]))
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body, json!({ "data": [], "error": "Nope" }));
    }

    #[tokio::test]
    async fn test_defaults_to_null_data() {
        let response = AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Broken").into_response();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body, json!({ "data": null, "error": "Broken" }));
    }
}
