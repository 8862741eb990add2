use std::sync::Arc;

use async_trait::async_trait;
use configuration::Configuration;
use mockall::automock;
use serde::Serialize;

use crate::{
    apis::{Error, ResponseContent, configuration},
    models::{
        login_request_model::LoginRequestModel, login_response_model::LoginResponseModel,
        message_response_model::MessageResponseModel,
        register_request_model::RegisterRequestModel,
    },
};

#[automock]
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// POST /api/register
    async fn register(
        &self,
        request_model: RegisterRequestModel,
    ) -> Result<MessageResponseModel, Error>;

    /// POST /api/login
    async fn login(&self, request_model: LoginRequestModel) -> Result<LoginResponseModel, Error>;
}

pub struct AccountsApiClient {
    configuration: Arc<Configuration>,
}

impl AccountsApiClient {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }
}

#[async_trait]
impl AccountsApi for AccountsApiClient {
    async fn register(
        &self,
        request_model: RegisterRequestModel,
    ) -> Result<MessageResponseModel, Error> {
        let response = request(&self.configuration, "register", request_model).await?;

        let body = response.text().await?;
        let response_model = serde_json::from_str::<MessageResponseModel>(&body)?;
        Ok(response_model)
    }

    async fn login(
        &self,
        request_model: LoginRequestModel,
    ) -> Result<LoginResponseModel, Error> {
        let response = request(&self.configuration, "login", request_model).await?;

        let body = response.text().await?;
        let response_model = serde_json::from_str::<LoginResponseModel>(&body)?;
        Ok(response_model)
    }
}

async fn request(
    configuration: &Arc<Configuration>,
    path: &str,
    body: impl Serialize,
) -> Result<reqwest::Response, Error> {
    let url = format!("{}/api/{}", configuration.base_path, path);

    let mut request = configuration
        .client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(reqwest::header::ACCEPT, "application/json");

    if let Some(ref user_agent) = configuration.user_agent {
        request = request.header(reqwest::header::USER_AGENT, user_agent.clone());
    }
    request = request.body(serde_json::to_string(&body)?);

    let response = request.send().await?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let content = response.text().await?;
        return Err(Error::ResponseError(ResponseContent { status, content }));
    }

    Ok(response)
}
