// src/errors.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const GENERIC_SERVER_ERROR: &str = "Server error. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    FetchError(String),

    #[error("{0}")]
    DispatchError(String),

    #[error("{0}")]
    UnhandledError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl AppError {
    fn status_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            AppError::FetchError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Document fetch failed"),
            AppError::DispatchError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Email dispatch failed"),
            AppError::UnhandledError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            AppError::ConfigurationError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label) = self.status_and_label();

        let message = match &self {
            AppError::ConfigurationError(_) => label.to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("❌ {}: {}", label, self);
        } else {
            tracing::warn!("{}: {}", label, self);
        }

        let body = Json(json!({
            "success": false,
            "message": message,
            "error": label,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                AppError::ValidationError(format!("Invalid request body: {}", rejection.body_text()))
            }
            other => {
                tracing::error!("Unexpected body rejection: {}", other.body_text());
                AppError::UnhandledError(GENERIC_SERVER_ERROR.to_string())
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        tracing::error!("Template render failed: {}", err);
        AppError::UnhandledError(GENERIC_SERVER_ERROR.to_string())
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        AppError::FetchError(msg.into())
    }

    pub fn dispatch(msg: impl Into<String>) -> Self {
        AppError::DispatchError(msg.into())
    }

    pub fn unhandled(msg: impl Into<String>) -> Self {
        AppError::UnhandledError(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::ConfigurationError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_bad_request() {
        let response = AppError::invalid_data("Email is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Email is required");
    }

    #[tokio::test]
    async fn fetch_error_keeps_underlying_message() {
        let response = AppError::fetch("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "connection refused");
        assert_eq!(body["error"], "Document fetch failed");
    }

    #[tokio::test]
    async fn configuration_error_hides_details() {
        let response = AppError::configuration("USER_EMAIL_PASS not set").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Configuration error");
    }

    #[tokio::test]
    async fn template_error_is_generic_server_error() {
        let err: AppError = askama::Error::Fmt(std::fmt::Error).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], GENERIC_SERVER_ERROR);
    }
}
