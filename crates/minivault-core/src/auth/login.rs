use minivault_api::{
    apis::{ApiClient, Error as RawApiError},
    models::LoginRequestModel,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ApiError, InternalClient};

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Result of a successful login. The bearer token itself is stored on the
/// client and never handed to the caller.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginResponse {
    /// Username the session was established for.
    pub username: String,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(super) async fn login(
    internal: &InternalClient,
    api_client: &ApiClient,
    req: &LoginRequest,
) -> Result<LoginResponse, LoginError> {
    let result = api_client
        .accounts_api()
        .login(LoginRequestModel {
            username: req.username.clone(),
            password: req.password.clone(),
        })
        .await;

    match result {
        Ok(resp) => {
            internal.set_tokens(resp.token);
            tracing::info!(username = %resp.username, "logged in");

            Ok(LoginResponse {
                username: resp.username,
            })
        }
        Err(RawApiError::ResponseError(e)) if e.status == reqwest::StatusCode::UNAUTHORIZED => {
            Err(LoginError::InvalidCredentials)
        }
        Err(e) => Err(ApiError::from(e).into()),
    }
}
