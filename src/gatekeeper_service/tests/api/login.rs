use gatekeeper_adapters::RegexEmailValidator;
use gatekeeper_application::LoginRouter;
use gatekeeper_core::{AccessToken, AuthUseCase};
use secrecy::Secret;
use serde_json::{Value, json};

use crate::helpers::{TEST_EMAIL, TEST_PASSWORD, TestApp};

struct PanickingAuthUseCase;

#[async_trait::async_trait]
impl AuthUseCase for PanickingAuthUseCase {
    type Error = std::convert::Infallible;

    async fn auth(
        &self,
        _email: &str,
        _password: &Secret<String>,
    ) -> Result<Option<AccessToken>, Self::Error> {
        panic!("auth backend exploded")
    }
}

#[tokio::test]
async fn should_return_200_and_token_for_valid_credentials() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["accessToken"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn should_return_400_if_no_email_is_provided() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "password": TEST_PASSWORD })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "MissingParamError", "message": "Missing param: email" })
    );
}

#[tokio::test]
async fn should_return_400_if_no_password_is_provided() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "email": TEST_EMAIL })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Missing param: password");
}

#[tokio::test]
async fn should_return_400_if_email_is_invalid() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "invalid_email", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "InvalidParamError");
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": TEST_EMAIL, "password": "wrong_password" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "UnauthorizedError");
}

#[tokio::test]
async fn should_return_500_for_malformed_body() {
    let app = TestApp::new().await;

    let response = app.post_login_raw("this is not json").await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "ServerError", "message": "Internal error" }));
}

#[tokio::test]
async fn should_return_500_for_missing_body() {
    let app = TestApp::new().await;

    let response = app.post_login_raw("").await;

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn should_return_500_when_auth_use_case_panics() {
    let login_router = LoginRouter::new(PanickingAuthUseCase, RegexEmailValidator::new().unwrap());
    let app = TestApp::spawn(login_router, "/api/login").await;

    let response = app
        .post_login(&json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "ServerError", "message": "Internal error" }));

    // The server keeps serving after the panic
    let response = app.post_login(&json!({ "password": TEST_PASSWORD })).await;
    assert_eq!(response.status().as_u16(), 400);
}
