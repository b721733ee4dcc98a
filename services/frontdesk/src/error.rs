use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::{MIN_REGISTRATION_PASSWORD_LEN, MIN_RESET_PASSWORD_LEN};

/// Frontdesk domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum FrontdeskError {
    #[error("all fields are required")]
    MissingFields,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("no fields to update")]
    EmptyUpdate,
    #[error("email not verified")]
    EmailNotVerified,
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("serial number already exists")]
    SerialNumberTaken,
    #[error("email not found")]
    EmailNotFound,
    #[error("patient not found")]
    PatientNotFound,
    #[error("appointment not found")]
    AppointmentNotFound,
    #[error("invalid or expired code")]
    InvalidOrExpiredCode,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("delivery failed")]
    DeliveryFailure,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl FrontdeskError {
    /// Taxonomy class for the variant. Validation and conflict failures are
    /// detected before any mutation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields
            | Self::PasswordTooShort(_)
            | Self::EmptyUpdate
            | Self::EmailNotVerified => "VALIDATION",
            Self::EmailAlreadyRegistered | Self::SerialNumberTaken => "CONFLICT",
            Self::EmailNotFound | Self::PatientNotFound | Self::AppointmentNotFound => "NOT_FOUND",
            Self::InvalidOrExpiredCode => "INVALID_OR_EXPIRED_CODE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::DeliveryFailure => "DELIVERY_FAILURE",
            Self::Internal(_) => "STORAGE_FAILURE",
        }
    }

    pub fn short_registration_password() -> Self {
        Self::PasswordTooShort(MIN_REGISTRATION_PASSWORD_LEN)
    }

    pub fn short_reset_password() -> Self {
        Self::PasswordTooShort(MIN_RESET_PASSWORD_LEN)
    }
}

impl IntoResponse for FrontdeskError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFields
            | Self::PasswordTooShort(_)
            | Self::EmptyUpdate
            | Self::EmailNotVerified
            | Self::InvalidOrExpiredCode => StatusCode::BAD_REQUEST,
            Self::EmailAlreadyRegistered | Self::SerialNumberTaken => StatusCode::CONFLICT,
            Self::EmailNotFound | Self::PatientNotFound | Self::AppointmentNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DeliveryFailure => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only: tower-http TraceLayer already records method/uri/status
        // for all requests, and 4xx are expected client errors. Internal errors
        // need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "STORAGE_FAILURE", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
