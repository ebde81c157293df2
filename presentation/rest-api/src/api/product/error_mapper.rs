use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorEnvelope, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorEnvelope>) {
        let (status, message, error) = match &self {
            ProductError::MissingFields => {
                (StatusCode::BAD_REQUEST, "Please provide all fields", None)
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found", None),
            ProductError::CatalogEmpty => (StatusCode::NOT_FOUND, "No products found", None),
            ProductError::Repository(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                Some(e.to_string()),
            ),
        };

        (status, Json(ErrorEnvelope::new(message, error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_fields_to_bad_request() {
        let (status, json) = ProductError::MissingFields.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!json.0.success);
        assert_eq!(json.0.message, "Please provide all fields");
        assert!(json.0.error.is_none());
    }

    #[test]
    fn should_map_empty_catalog_to_not_found() {
        let (status, json) = ProductError::CatalogEmpty.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "No products found");
    }

    #[test]
    fn should_attach_diagnostic_to_internal_error() {
        let err = ProductError::Repository(RepositoryError::database_error("pool timed out"));

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "Internal server error");
        assert_eq!(
            json.0.error.as_deref(),
            Some("repository.database_error: pool timed out")
        );
    }
}
