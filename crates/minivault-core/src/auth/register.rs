use minivault_api::{
    apis::{ApiClient, Error as RawApiError},
    models::RegisterRequestModel,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ApiError;

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(super) async fn register(
    api_client: &ApiClient,
    req: &RegisterRequest,
) -> Result<(), RegisterError> {
    let result = api_client
        .accounts_api()
        .register(RegisterRequestModel {
            username: req.username.clone(),
            password: req.password.clone(),
        })
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(RawApiError::ResponseError(e)) if e.status == reqwest::StatusCode::BAD_REQUEST => {
            Err(RegisterError::UsernameTaken)
        }
        Err(e) => Err(ApiError::from(e).into()),
    }
}
