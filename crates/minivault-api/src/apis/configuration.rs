/// Configuration for the minivault API client.
///
/// Holds everything needed to reach a server: the base URL, the HTTP client
/// with middleware support, and the bearer token obtained from login.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the server, without the `/api` prefix (e.g. `http://localhost:5000`).
    pub base_path: String,
    /// User-Agent header value to be sent with requests.
    pub user_agent: Option<String>,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
    /// Bearer token returned by the login endpoint. Attached to every request
    /// when present.
    pub access_token: Option<String>,
}

impl Configuration {
    #[allow(missing_docs)]
    pub fn new() -> Configuration {
        Configuration::default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: "http://localhost:5000".to_owned(),
            user_agent: Some("minivault/rust".to_owned()),
            client: reqwest::Client::new().into(),
            access_token: None,
        }
    }
}
