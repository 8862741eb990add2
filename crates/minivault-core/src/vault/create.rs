use minivault_api::apis::ApiClient;
use thiserror::Error;

use super::password_entry::PasswordEntryAddEditRequest;
use crate::{ApiError, NotAuthenticatedError};

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CreatePasswordError {
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(super) async fn create_password(
    api_client: &ApiClient,
    request: &PasswordEntryAddEditRequest,
) -> Result<(), CreatePasswordError> {
    api_client
        .passwords_api()
        .post_password(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use minivault_api::{apis::Error as RawApiError, models::MessageResponseModel};

    use super::*;

    fn entry_request() -> PasswordEntryAddEditRequest {
        PasswordEntryAddEditRequest {
            account: "example.com".to_string(),
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_password() {
        let api_client = ApiClient::new_mocked(|mock| {
            mock.passwords_api
                .expect_post_password()
                .returning(|model| {
                    assert_eq!(model.account, "example.com");
                    assert_eq!(model.password, "hunter2");
                    Ok(MessageResponseModel {
                        message: "Password added successfully".to_string(),
                    })
                })
                .once();
        });

        let result = create_password(&api_client, &entry_request()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_password_http_error() {
        let api_client = ApiClient::new_mocked(|mock| {
            mock.passwords_api.expect_post_password().returning(|_model| {
                Err(RawApiError::Io(std::io::Error::other("Simulated error")))
            });
        });

        let result = create_password(&api_client, &entry_request()).await;

        assert!(matches!(result.unwrap_err(), CreatePasswordError::Api(_)));
    }
}
