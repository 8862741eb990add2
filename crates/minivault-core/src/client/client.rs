use std::sync::{Arc, RwLock};

use minivault_api::Configuration;

use super::internal::InternalClient;
use crate::client::{client_settings::ClientSettings, internal::ApiConfigurations};

/// The main struct to interact with the minivault SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so any mutable state needs to be behind an Arc as part
    // of the [`InternalClient`] struct.
    #[allow(missing_docs)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new minivault client. Tokens are managed by the SDK: a
    /// successful login stores the returned bearer token on the client.
    pub fn new(settings_input: Option<ClientSettings>) -> Self {
        let settings = settings_input.unwrap_or_default();

        let http_client = reqwest::Client::builder()
            .build()
            .expect("HTTP Client build should not fail");
        let http_client = reqwest_middleware::ClientBuilder::new(http_client).build();

        let api = Configuration {
            base_path: settings.api_url,
            user_agent: Some(settings.user_agent),
            client: http_client,
            access_token: None,
        };

        Self {
            internal: Arc::new(InternalClient {
                access_token: RwLock::new(None),
                __api_configurations: RwLock::new(ApiConfigurations::new(api)),
            }),
        }
    }
}
