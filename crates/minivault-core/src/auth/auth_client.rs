use super::{
    login::{LoginError, LoginRequest, LoginResponse, login},
    register::{RegisterError, RegisterRequest, register},
};
use crate::Client;

/// Account operations: registration and login.
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Create a new account on the server.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), RegisterError> {
        let config = self.client.internal.get_api_configurations();
        register(&config.api_client, request).await
    }

    /// Authenticate against the server. On success the returned bearer token
    /// is stored on the client and attached to all vault requests.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        let config = self.client.internal.get_api_configurations();
        login(&self.client.internal, &config.api_client, request).await
    }
}

impl Client {
    /// Access to authentication functionality.
    pub fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
