use super::types::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use twilio_sms_core::SendFailure;

/// Request-scoped failures of the HTTP front-end
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body was not JSON or did not match the expected shape
    #[error("Invalid request data")]
    InvalidRequest(String),

    #[error("Missing required fields: 'to' and 'occasion'")]
    MissingGreetingFields,

    #[error("{} (e.g., +11234567890)", SendFailure::InvalidRecipient)]
    InvalidRecipient,

    /// The provider rejected or never received the message
    #[error("{context}")]
    SendFailed {
        context: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Translate a dispatch failure; `context` is the top-level error text for provider failures.
    #[must_use]
    pub fn from_failure(failure: SendFailure, context: &'static str) -> Self {
        match failure {
            SendFailure::InvalidRecipient => Self::InvalidRecipient,
            SendFailure::Provider(details) => Self::SendFailed { context, details },
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::MissingGreetingFields | Self::InvalidRecipient => {
                StatusCode::BAD_REQUEST
            }
            Self::SendFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let details = match self {
            Self::InvalidRequest(details) | Self::SendFailed { details, .. } => Some(details),
            Self::MissingGreetingFields | Self::InvalidRecipient => None,
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
