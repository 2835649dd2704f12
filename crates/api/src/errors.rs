use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_lookup_domain::{DomainError, INVALID_DOMAIN_HINT};
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidDomainName(_) => {
                (StatusCode::BAD_REQUEST, INVALID_DOMAIN_HINT.to_string())
            }

            DomainError::MissingQueryInput | DomainError::UnsupportedRecordType(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
