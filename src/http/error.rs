use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::player::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u16)]
pub enum ApiErrorCode {
    // Request Errors
    MissingUid = 4001,

    // Resource Errors
    RouteNotFound = 4040,

    // Upstream Errors
    ExternalServiceError = 5001,
    InvalidResponse = 5002,
}

impl ApiErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingUid => "MISSING_UID",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::InvalidResponse => "INVALID_RESPONSE",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub status: Cow<'static, str>,
    pub error_code: ApiErrorCode,
    pub error: Cow<'static, str>,
}

impl ApiError {
    pub fn new(status_code: StatusCode, error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        let error = error.into();
        tracing::warn!(code = error_code.as_str(), %error, "api error");

        Self {
            status_code,
            status: status_code.canonical_reason().unwrap_or("unknown").into(),
            error_code,
            error,
        }
    }

    pub fn bad_request(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_code, error)
    }

    pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_code, error)
    }

    pub fn bad_gateway(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, error_code, error)
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        let code = match e {
            FetchError::FetchFailed(_) => ApiErrorCode::ExternalServiceError,
            FetchError::InvalidResponse(_) => ApiErrorCode::InvalidResponse,
        };
        Self::bad_gateway(code, e.user_message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_numeric_code() {
        let err = ApiError::bad_request(ApiErrorCode::MissingUid, "uid is required");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "Bad Request",
                "error_code": 4001,
                "error": "uid is required"
            })
        );
    }

    #[test]
    fn fetch_errors_map_to_bad_gateway() {
        let invalid = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::from(FetchError::InvalidResponse(invalid));

        assert_eq!(err.status_code, StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code, ApiErrorCode::InvalidResponse);
        assert_eq!(err.error, "Invalid response from API");
    }
}
