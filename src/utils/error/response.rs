//! HTTP response handling for errors

use super::types::InventoryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for InventoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            InventoryError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            InventoryError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            InventoryError::Conflict(_) => ("CONFLICT", self.to_string()),
            InventoryError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            // Serialization failures on the way out are defects, not user errors
            InventoryError::Serialization(_) => (
                "SERIALIZATION_ERROR",
                "Failed to serialize response".to_string(),
            ),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
