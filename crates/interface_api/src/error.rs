//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use dialogue_actions::ActionError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// The store is configured but unreachable; the turn fails and the
    /// runtime sees a 503
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An upstream call (runtime webhook, widget API) failed
    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg.clone())
            }
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        if err.is_service_unavailable() {
            return ApiError::ServiceUnavailable(err.to_string());
        }
        match err {
            ActionError::UnknownAction(name) => {
                ApiError::BadRequest(format!("unknown action: {name}"))
            }
            ActionError::MissingSlot(slot) => {
                ApiError::BadRequest(format!("required slot '{slot}' is missing"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::StoreError;

    #[test]
    fn test_unreachable_store_maps_to_503() {
        let action_err = ActionError::Store(StoreError::Connection("refused".to_string()));
        let api_err = ApiError::from(action_err);
        assert!(matches!(api_err, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_unknown_action_maps_to_400() {
        let api_err = ApiError::from(ActionError::UnknownAction("action_x".to_string()));
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }
}
