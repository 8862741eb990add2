use minivault_api::Configuration;

/// Helper for testing the minivault API using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, Configuration) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = Configuration {
        base_path: server.uri(),
        user_agent: Some("test-agent".to_string()),
        client: reqwest::Client::new().into(),
        access_token: None,
    };

    (server, config)
}
