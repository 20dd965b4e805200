use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ForbiddenBody {
    error: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct InternalBody {
    message: &'static str,
    error: String,
}

/// Application-level HTTP errors.
///
/// `Forbidden` carries the reason-specific denial text; `Internal` echoes the
/// failure detail verbatim in the response body. The latter is preserved
/// current behavior and a known information-disclosure concern, flagged in
/// `DESIGN.md`.
#[derive(Debug)]
pub enum AppError {
    Forbidden { message: &'static str },
    Internal { detail: String },
}

impl AppError {
    pub fn forbidden(message: &'static str) -> Self {
        Self::Forbidden { message }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                Json(ForbiddenBody {
                    error: "Forbidden",
                    message,
                }),
            )
                .into_response(),
            AppError::Internal { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalBody {
                    message: "Internal server error",
                    error: detail,
                }),
            )
                .into_response(),
        }
    }
}
