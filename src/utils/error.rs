use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Classified failure for a generation request. Every stage of the
/// pipeline reports through this type so the caller always receives a
/// tagged result instead of a raw transport error.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("upstream model call failed: {0}")]
    Upstream(String),
    #[error("model returned no usable result: {0}")]
    EmptyResult(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
}

impl GenerationError {
    pub fn category(&self) -> &'static str {
        match self {
            GenerationError::Validation(_) => "validation",
            GenerationError::Upstream(_) => "upstream",
            GenerationError::EmptyResult(_) => "empty-result",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            GenerationError::Validation(_) => StatusCode::BAD_REQUEST,
            GenerationError::Upstream(_) | GenerationError::EmptyResult(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Validation(_) => "Invalid input provided.",
            GenerationError::Upstream(_) | GenerationError::EmptyResult(_) => {
                "Generation failed. Please try again later."
            }
        }
    }
}

impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.category(),
            message: self.user_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = GenerationError::Validation("image missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_and_empty_result_map_to_bad_gateway() {
        let upstream = GenerationError::Upstream("timeout".to_string()).into_response();
        let empty = GenerationError::EmptyResult("no image".to_string()).into_response();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(empty.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn categories_are_stable() {
        assert_eq!(
            GenerationError::Validation(String::new()).category(),
            "validation"
        );
        assert_eq!(
            GenerationError::Upstream(String::new()).category(),
            "upstream"
        );
        assert_eq!(
            GenerationError::EmptyResult(String::new()).category(),
            "empty-result"
        );
    }
}
