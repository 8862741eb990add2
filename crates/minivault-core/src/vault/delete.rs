use minivault_api::apis::{ApiClient, Error as RawApiError};
use thiserror::Error;

use crate::{ApiError, NotAuthenticatedError};

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DeletePasswordError {
    #[error("Password entry not found")]
    NotFound,
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(super) async fn delete_password(
    api_client: &ApiClient,
    id: i32,
) -> Result<(), DeletePasswordError> {
    let result = api_client.passwords_api().delete_password(id).await;

    match result {
        Ok(_) => Ok(()),
        Err(RawApiError::ResponseError(e)) if e.status == reqwest::StatusCode::NOT_FOUND => {
            Err(DeletePasswordError::NotFound)
        }
        Err(e) => Err(ApiError::from(e).into()),
    }
}
