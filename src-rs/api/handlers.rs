use std::any::Any;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::GenerateError;
use crate::form::CaptionForm;
use crate::generator::CaptionGenerator;
use crate::result::{ErrorResponse, TextResponse};

pub const ALLOWED_METHOD: &str = "POST";

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

/// Generates caption variations. Mounted for every method so that the method
/// check answers with `Allow` instead of the router's bare 405.
pub async fn handle_generate(
    State(generator): State<CaptionGenerator>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method.as_str() != ALLOWED_METHOD {
        return GenerateError::MethodNotAllowed.into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return GenerateError::BodyTooLarge.into_response();
        }
        Err(rejection) => {
            return GenerateError::Internal(format!("failed to read request body: {}", rejection.body_text()))
                .into_response();
        }
    };

    let form = CaptionForm::from_body(&body);
    match generator.generate(form).await {
        Ok(text) => (StatusCode::OK, Json(TextResponse { text })).into_response(),
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        // Last stop for unexpected failures; the caller only sees the generic message.
        if let GenerateError::Internal(detail) = &self {
            error!(detail = %detail, "generation failed");
        }
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.public_message(),
        });
        match self {
            GenerateError::MethodNotAllowed => (status, [(header::ALLOW, ALLOWED_METHOD)], body).into_response(),
            _ => (status, body).into_response(),
        }
    }
}

/// Response for a panic inside a handler, installed through `CatchPanicLayer`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    };
    GenerateError::Internal(format!("handler panicked: {}", detail)).into_response()
}
