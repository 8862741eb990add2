//! End-to-end client flow against a wiremock server: register, login, then
//! manage password entries with the stored bearer token.

use minivault_core::{
    Client, ClientSettings,
    auth::{LoginError, LoginRequest, RegisterRequest},
    vault::PasswordEntryAddEditRequest,
};
use minivault_test::start_api_mock;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const USERNAME: &str = "alice";
const PASSWORD: &str = "correct horse battery staple";
const TOKEN: &str = "issued_token";

async fn setup_client(mocks: Vec<Mock>) -> (MockServer, Client) {
    let (server, api_config) = start_api_mock(mocks).await;

    let client = Client::new(Some(ClientSettings {
        api_url: api_config.base_path,
        user_agent: api_config.user_agent.unwrap_or_default(),
    }));

    (server, client)
}

#[tokio::test]
async fn register_login_and_manage_passwords() {
    let (_server, client) = setup_client(vec![
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(body_json(serde_json::json!({
                "username": USERNAME,
                "password": PASSWORD,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "User created successfully"
            })))
            .expect(1),
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(serde_json::json!({
                "username": USERNAME,
                "password": PASSWORD,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": TOKEN,
                "username": USERNAME,
            })))
            .expect(1),
        Mock::given(method("GET"))
            .and(path("/api/passwords"))
            .and(header("authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": 1,
                "account": "example.com",
                "username": USERNAME,
                "encrypted_password": "gAAAAABk"
            }])))
            .expect(1),
        Mock::given(method("POST"))
            .and(path("/api/passwords"))
            .and(header("authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "Password added successfully"
            })))
            .expect(1),
        Mock::given(method("PUT"))
            .and(path("/api/passwords/1"))
            .and(header("authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Password updated"
            })))
            .expect(1),
        Mock::given(method("DELETE"))
            .and(path("/api/passwords/1"))
            .and(header("authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Password deleted"
            })))
            .expect(1),
    ])
    .await;

    client
        .auth()
        .register(&RegisterRequest {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    let response = client
        .auth()
        .login(&LoginRequest {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.username, USERNAME);
    assert!(client.internal.is_authenticated());

    let entries = client.vault().list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[0].account, "example.com");

    let entry = PasswordEntryAddEditRequest {
        account: "example.org".to_string(),
        username: USERNAME.to_string(),
        password: "hunter2".to_string(),
    };
    client.vault().create(&entry).await.unwrap();
    client.vault().edit(1, &entry).await.unwrap();
    client.vault().delete(1).await.unwrap();
}

#[tokio::test]
async fn login_with_wrong_password_does_not_authenticate() {
    let (_server, client) = setup_client(vec![
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Invalid credentials"
            })))
            .expect(1),
    ])
    .await;

    let result = client
        .auth()
        .login(&LoginRequest {
            username: USERNAME.to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert!(matches!(result.unwrap_err(), LoginError::InvalidCredentials));
    assert!(!client.internal.is_authenticated());
}
