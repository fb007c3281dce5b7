use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DuplicateKey(_) => AppError::Conflict(e.to_string()),
            DomainError::StoreUnavailable(msg) => AppError::Unavailable(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::Validation(fields) => builder.json(serde_json::json!({
                "error": self.to_string(),
                "fields": fields
            })),
            AppError::BadRequest(msg) | AppError::Conflict(msg) => {
                builder.json(serde_json::json!({ "error": msg }))
            }
            AppError::NotFound => builder.json(serde_json::json!({
                "error": self.to_string()
            })),
            // Store and internal details stay in the logs.
            AppError::Unavailable(msg) => {
                log::error!("Item store unavailable: {}", msg);
                builder.json(serde_json::json!({ "error": "Service unavailable" }))
            }
            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                builder.json(serde_json::json!({ "error": "Internal server error" }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use serde_json::Value;
    use uuid::Uuid;

    async fn body_json(err: &AppError) -> Value {
        let bytes = to_bytes(err.error_response().into_body())
            .await
            .expect("readable body");
        serde_json::from_slice(&bytes).expect("JSON body")
    }

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::Validation(vec![]), StatusCode::BAD_REQUEST),
            (AppError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::Conflict("x".to_string()), StatusCode::CONFLICT),
            (
                AppError::Unavailable("x".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Internal("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.error_response().status(), status);
        }
    }

    #[actix_web::test]
    async fn validation_body_lists_fields() {
        let err = AppError::Validation(vec![FieldError {
            field: "price",
            message: "price must be between 1 and 1000".to_string(),
        }]);

        let body = body_json(&err).await;

        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["fields"][0]["field"], "price");
        assert_eq!(body["fields"][0]["message"], "price must be between 1 and 1000");
    }

    #[actix_web::test]
    async fn internal_details_are_not_leaked() {
        let body = body_json(&AppError::Internal("db password wrong".to_string())).await;
        assert_eq!(body["error"], "Internal server error");

        let body = body_json(&AppError::Unavailable("no primary".to_string())).await;
        assert_eq!(body["error"], "Service unavailable");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn domain_duplicate_key_maps_to_conflict() {
        let app_err: AppError = DomainError::DuplicateKey(Uuid::nil()).into();
        assert!(matches!(app_err, AppError::Conflict(_)));
    }

    #[test]
    fn domain_store_unavailable_maps_to_unavailable() {
        let app_err: AppError = DomainError::StoreUnavailable("timeout".to_string()).into();
        assert!(matches!(app_err, AppError::Unavailable(msg) if msg == "timeout"));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
