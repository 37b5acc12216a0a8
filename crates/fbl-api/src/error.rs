use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages;

/// Request-level failures, mapped onto the fixed status/body pairs the
/// HTTP surface promises. Upstream causes are logged, never leaked.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("authorization code is missing")]
    MissingAuthCode,
    #[error("token exchange failed: {0}")]
    TokenExchange(#[source] reqwest::Error),
    #[error("profile fetch failed: {0}")]
    ProfileFetch(#[source] reqwest::Error),
    #[error("permission revocation failed: {0}")]
    RevokePermissions(#[source] reqwest::Error),
    #[error("signed_request is missing")]
    MissingSignedRequest,
    #[error("malformed signed_request: {0}")]
    MalformedSignedRequest(String),
    #[error("signed_request signature mismatch")]
    SignatureMismatch,
    #[error("no user id in signed_request payload")]
    MissingUserId,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAuthCode
            | Self::MissingSignedRequest
            | Self::MalformedSignedRequest(_)
            | Self::SignatureMismatch
            | Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::TokenExchange(_) | Self::ProfileFetch(_) | Self::RevokePermissions(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "upstream call failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }

        match self {
            Self::MissingAuthCode => (status, "Authorization code is missing.").into_response(),
            Self::TokenExchange(_) | Self::ProfileFetch(_) => {
                (status, "Error during Facebook OAuth process.").into_response()
            }
            Self::RevokePermissions(_) => (status, Html(pages::DELETE_FAILED)).into_response(),
            Self::MissingSignedRequest
            | Self::MalformedSignedRequest(_)
            | Self::SignatureMismatch => (status, "Invalid request").into_response(),
            Self::MissingUserId => (status, "User ID not found in request").into_response(),
        }
    }
}
