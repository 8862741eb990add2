use std::sync::{Arc, RwLock};

use minivault_api::{Configuration, apis::ApiClient};

/// The API client together with the configuration it was built from.
///
/// The configuration is kept so that the client can be rebuilt whenever the
/// access token changes.
pub struct ApiConfigurations {
    #[allow(missing_docs)]
    pub api_client: ApiClient,
    #[allow(missing_docs)]
    pub api_config: Configuration,
}

impl std::fmt::Debug for ApiConfigurations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfigurations")
            .field("api_config", &self.api_config)
            .finish_non_exhaustive()
    }
}

impl ApiConfigurations {
    pub(crate) fn new(api_config: Configuration) -> Arc<Self> {
        let api = Arc::new(api_config.clone());
        let api_client = ApiClient::new(&api);
        Arc::new(Self {
            api_client,
            api_config,
        })
    }

    pub(crate) fn set_tokens(self: &mut Arc<Self>, token: String) {
        let mut api = self.api_config.clone();
        api.access_token = Some(token);

        *self = ApiConfigurations::new(api);
    }
}

/// Mutable state shared by all clones of a [Client](crate::Client).
pub struct InternalClient {
    pub(crate) access_token: RwLock<Option<String>>,

    /// Use [InternalClient::get_api_configurations] to access this.
    #[doc(hidden)]
    pub(crate) __api_configurations: RwLock<Arc<ApiConfigurations>>,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient").finish_non_exhaustive()
    }
}

impl InternalClient {
    /// Whether a bearer token is currently stored on the client.
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .read()
            .expect("RwLock is not poisoned")
            .is_some()
    }

    /// Store the bearer token returned by login and rebuild the API clients
    /// so that subsequent requests carry it.
    pub fn set_tokens(&self, token: String) {
        *self.access_token.write().expect("RwLock is not poisoned") = Some(token.clone());

        self.__api_configurations
            .write()
            .expect("RwLock is not poisoned")
            .set_tokens(token);

        tracing::debug!("access token updated");
    }

    #[allow(missing_docs)]
    pub fn get_api_configurations(&self) -> Arc<ApiConfigurations> {
        self.__api_configurations
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }
}
