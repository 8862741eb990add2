//! API clients for the minivault server endpoints.

use std::sync::Arc;

use crate::apis::configuration::Configuration;

pub mod accounts_api;
pub mod configuration;
pub mod passwords_api;

/// Status and body of an HTTP error response.
#[derive(Debug, Clone)]
pub struct ResponseContent {
    /// HTTP status code of the response.
    pub status: reqwest::StatusCode,
    /// Raw response body content.
    pub content: String,
}

#[allow(missing_docs)]
#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    ReqwestMiddleware(reqwest_middleware::Error),
    Serde(serde_json::Error),
    Io(std::io::Error),
    ResponseError(ResponseContent),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Reqwest(e) => write!(f, "error in reqwest: {e}"),
            Error::ReqwestMiddleware(e) => write!(f, "error in reqwest middleware: {e}"),
            Error::Serde(e) => write!(f, "error in serde: {e}"),
            Error::Io(e) => write!(f, "error in IO: {e}"),
            Error::ResponseError(e) => write!(f, "error in response: status code {}", e.status),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Reqwest(e) => Some(e),
            Error::ReqwestMiddleware(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::ResponseError(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e)
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        Error::ReqwestMiddleware(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serde(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Facade over the individual endpoint clients, selecting between the real
/// reqwest-backed implementations and mockall mocks.
pub enum ApiClient {
    /// Clients that perform actual HTTP requests.
    Real(ApiClientReal),
    /// Mocked clients for testing.
    Mock(ApiClientMock),
}

#[allow(missing_docs)]
pub struct ApiClientReal {
    accounts_api: accounts_api::AccountsApiClient,
    passwords_api: passwords_api::PasswordsApiClient,
}

#[allow(missing_docs)]
pub struct ApiClientMock {
    pub accounts_api: accounts_api::MockAccountsApi,
    pub passwords_api: passwords_api::MockPasswordsApi,
}

impl ApiClient {
    /// Create a client that sends requests to the server in `configuration`.
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        Self::Real(ApiClientReal {
            accounts_api: accounts_api::AccountsApiClient::new(configuration.clone()),
            passwords_api: passwords_api::PasswordsApiClient::new(configuration.clone()),
        })
    }

    /// Create a fully mocked client. The callback configures the expectations.
    pub fn new_mocked(func: impl FnOnce(&mut ApiClientMock)) -> Self {
        let mut mock = ApiClientMock {
            accounts_api: accounts_api::MockAccountsApi::new(),
            passwords_api: passwords_api::MockPasswordsApi::new(),
        };
        func(&mut mock);
        Self::Mock(mock)
    }

    #[allow(missing_docs)]
    pub fn accounts_api(&self) -> &dyn accounts_api::AccountsApi {
        match self {
            ApiClient::Real(real) => &real.accounts_api,
            ApiClient::Mock(mock) => &mock.accounts_api,
        }
    }

    #[allow(missing_docs)]
    pub fn passwords_api(&self) -> &dyn passwords_api::PasswordsApi {
        match self {
            ApiClient::Real(real) => &real.passwords_api,
            ApiClient::Mock(mock) => &mock.passwords_api,
        }
    }
}
