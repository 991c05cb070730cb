use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tachanun_core::TachanunError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(TachanunError::InvalidDate(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<TachanunError>() {
            Some(TachanunError::InvalidDate(_) | TachanunError::TooManyDays { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Some(TachanunError::DateOutOfRange(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(TachanunError::Io(_) | TachanunError::Yaml(_)) | None => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
