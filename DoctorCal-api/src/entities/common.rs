use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use doctor_cal_domain::services::validation_message;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a validation error response from validator output
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self::validation_error(&validation_message(errors), serde_json::to_value(errors).ok())
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "validation_error" => StatusCode::BAD_REQUEST,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Outcome of forwarding a result to the clinic endpoint
///
/// A failed submission is a notice, not an error: the computed result stays valid.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// Whether the clinic endpoint accepted the record
    pub submitted: bool,

    /// Confirmation or failure notice
    pub message: String,
}

impl SubmissionResponse {
    pub fn saved() -> Self {
        Self {
            submitted: true,
            message: "Saved to clinic records".to_string(),
        }
    }

    pub fn failed(reason: impl ToString) -> Self {
        Self {
            submitted: false,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let response = ErrorResponse::validation_error("bad", None).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ErrorResponse::internal_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("Invalid date.")).unwrap();
        assert_eq!(json["error"], "bad_request");
        assert!(json.get("details").is_none());
    }
}
