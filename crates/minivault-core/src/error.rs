//! Errors that can occur when using this SDK

use minivault_api::apis::Error as RawApiError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent { status: StatusCode, message: String },
}

impl From<RawApiError> for ApiError {
    fn from(e: RawApiError) -> Self {
        match e {
            RawApiError::Reqwest(e) => Self::Reqwest(e),
            RawApiError::ReqwestMiddleware(e) => Self::ReqwestMiddleware(e),
            RawApiError::ResponseError(e) => Self::ResponseContent {
                status: e.status,
                message: e.content,
            },
            RawApiError::Serde(e) => Self::Serde(e),
            RawApiError::Io(e) => Self::Io(e),
        }
    }
}

/// Client is not authenticated or the session has expired.
#[derive(Debug, Error)]
#[error("The client is not authenticated or the session has expired")]
pub struct NotAuthenticatedError;
