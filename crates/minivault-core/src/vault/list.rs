use minivault_api::apis::ApiClient;
use thiserror::Error;

use super::password_entry::PasswordEntryView;
use crate::{ApiError, NotAuthenticatedError};

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ListPasswordsError {
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(super) async fn list_passwords(
    api_client: &ApiClient,
) -> Result<Vec<PasswordEntryView>, ListPasswordsError> {
    let entries = api_client
        .passwords_api()
        .get_passwords()
        .await
        .map_err(ApiError::from)?;

    Ok(entries.into_iter().map(PasswordEntryView::from).collect())
}
