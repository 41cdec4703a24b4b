//! Error handling integration tests
//!
//! Verify that errors map to the right HTTP status and body.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use supermarket::InventoryError;
    use supermarket::utils::error::ErrorResponse;

    fn body_of(err: &InventoryError) -> ErrorResponse {
        let bytes = err
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap_or_default();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = InventoryError::bad_request("Invalid request body: expected array");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_of(&err);
        assert_eq!(body.error.code, "BAD_REQUEST");
        assert!(body.error.message.contains("expected array"));
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = InventoryError::conflict("Produce code A12T-4GH7-QPL9-3N4M already exists");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(body_of(&err).error.code, "CONFLICT");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = InventoryError::internal("lock poisoned at store.rs:42");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(&err);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert!(!body.error.message.contains("store.rs"));
    }

    #[test]
    fn test_serialization_errors_are_server_errors() {
        let err: InventoryError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(&err).error.message, "Failed to serialize response");
    }
}
