use std::sync::Arc;

use async_trait::async_trait;
use configuration::Configuration;
use mockall::automock;
use reqwest::Method;
use serde::Serialize;

use crate::{
    apis::{Error, ResponseContent, configuration},
    models::{
        message_response_model::MessageResponseModel,
        password_entry_request_model::PasswordEntryRequestModel,
        password_entry_response_model::PasswordEntryResponseModel,
    },
};

#[automock]
#[async_trait]
pub trait PasswordsApi: Send + Sync {
    /// GET /api/passwords
    async fn get_passwords(&self) -> Result<Vec<PasswordEntryResponseModel>, Error>;

    /// POST /api/passwords
    async fn post_password(
        &self,
        request_model: PasswordEntryRequestModel,
    ) -> Result<MessageResponseModel, Error>;

    /// PUT /api/passwords/{id}
    async fn put_password(
        &self,
        id: i32,
        request_model: PasswordEntryRequestModel,
    ) -> Result<MessageResponseModel, Error>;

    /// DELETE /api/passwords/{id}
    async fn delete_password(&self, id: i32) -> Result<MessageResponseModel, Error>;
}

pub struct PasswordsApiClient {
    configuration: Arc<Configuration>,
}

impl PasswordsApiClient {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }
}

#[async_trait]
impl PasswordsApi for PasswordsApiClient {
    async fn get_passwords(&self) -> Result<Vec<PasswordEntryResponseModel>, Error> {
        let response = request(
            &self.configuration,
            Method::GET,
            "/api/passwords".to_string(),
            None::<()>,
        )
        .await?;

        let body = response.text().await?;
        let response_model = serde_json::from_str::<Vec<PasswordEntryResponseModel>>(&body)?;
        Ok(response_model)
    }

    async fn post_password(
        &self,
        request_model: PasswordEntryRequestModel,
    ) -> Result<MessageResponseModel, Error> {
        let response = request(
            &self.configuration,
            Method::POST,
            "/api/passwords".to_string(),
            Some(request_model),
        )
        .await?;

        let body = response.text().await?;
        let response_model = serde_json::from_str::<MessageResponseModel>(&body)?;
        Ok(response_model)
    }

    async fn put_password(
        &self,
        id: i32,
        request_model: PasswordEntryRequestModel,
    ) -> Result<MessageResponseModel, Error> {
        let response = request(
            &self.configuration,
            Method::PUT,
            format!("/api/passwords/{id}"),
            Some(request_model),
        )
        .await?;

        let body = response.text().await?;
        let response_model = serde_json::from_str::<MessageResponseModel>(&body)?;
        Ok(response_model)
    }

    async fn delete_password(&self, id: i32) -> Result<MessageResponseModel, Error> {
        let response = request(
            &self.configuration,
            Method::DELETE,
            format!("/api/passwords/{id}"),
            None::<()>,
        )
        .await?;

        let body = response.text().await?;
        let response_model = serde_json::from_str::<MessageResponseModel>(&body)?;
        Ok(response_model)
    }
}

async fn request(
    configuration: &Arc<Configuration>,
    method: Method,
    path: String,
    body: Option<impl Serialize>,
) -> Result<reqwest::Response, Error> {
    let url = format!("{}{}", configuration.base_path, path);

    let mut request = configuration
        .client
        .request(method, url)
        .header(reqwest::header::ACCEPT, "application/json");

    if let Some(ref user_agent) = configuration.user_agent {
        request = request.header(reqwest::header::USER_AGENT, user_agent.clone());
    }
    if let Some(ref access_token) = configuration.access_token {
        request = request.bearer_auth(access_token.clone());
    }
    if let Some(ref body) = body {
        request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&body)?);
    }

    let response = request.send().await?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let content = response.text().await?;
        return Err(Error::ResponseError(ResponseContent { status, content }));
    }

    Ok(response)
}
