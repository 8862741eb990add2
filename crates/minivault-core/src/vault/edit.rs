use minivault_api::apis::{ApiClient, Error as RawApiError};
use thiserror::Error;

use super::password_entry::PasswordEntryAddEditRequest;
use crate::{ApiError, NotAuthenticatedError};

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum EditPasswordError {
    #[error("Password entry not found")]
    NotFound,
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(super) async fn edit_password(
    api_client: &ApiClient,
    id: i32,
    request: &PasswordEntryAddEditRequest,
) -> Result<(), EditPasswordError> {
    let result = api_client
        .passwords_api()
        .put_password(id, request.into())
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(RawApiError::ResponseError(e)) if e.status == reqwest::StatusCode::NOT_FOUND => {
            Err(EditPasswordError::NotFound)
        }
        Err(e) => Err(ApiError::from(e).into()),
    }
}

#[cfg(test)]
mod tests {
    use minivault_api::{
        apis::ResponseContent,
        models::MessageResponseModel,
    };

    use super::*;

    fn entry_request() -> PasswordEntryAddEditRequest {
        PasswordEntryAddEditRequest {
            account: "example.com".to_string(),
            username: "alice".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn test_edit_password() {
        let api_client = ApiClient::new_mocked(|mock| {
            mock.passwords_api
                .expect_put_password()
                .returning(|id, model| {
                    assert_eq!(id, 7);
                    assert_eq!(model.password, "correct horse");
                    Ok(MessageResponseModel {
                        message: "Password updated".to_string(),
                    })
                })
                .once();
        });

        let result = edit_password(&api_client, 7, &entry_request()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_edit_password_not_found() {
        let api_client = ApiClient::new_mocked(|mock| {
            mock.passwords_api
                .expect_put_password()
                .returning(|_id, _model| {
                    Err(RawApiError::ResponseError(ResponseContent {
                        status: reqwest::StatusCode::NOT_FOUND,
                        content: r#"{"message": "Password not found"}"#.to_string(),
                    }))
                });
        });

        let result = edit_password(&api_client, 999, &entry_request()).await;

        assert!(matches!(result.unwrap_err(), EditPasswordError::NotFound));
    }
}
