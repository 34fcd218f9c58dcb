use gatekeeper_adapters::{
    GatekeeperSetting,
    config::{UserCredentials, test::APP_ADDRESS},
};
use gatekeeper_application::LoginRouter;
use gatekeeper_core::{AuthUseCase, EmailValidator};
use gatekeeper_service::{LoginService, build_login_router};
use secrecy::Secret;
use tokio::net::TcpListener;

pub const TEST_EMAIL: &str = "test@example.com";
pub const TEST_PASSWORD: &str = "password123";

const NO_ENV: [(&str, &str); 0] = [];

pub struct TestApp {
    pub address: String,
    pub login_path: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Serve the settings-built router with one seeded user
    pub async fn new() -> Self {
        let mut settings = GatekeeperSetting::load_from_env_vars("does/not/exist", NO_ENV).unwrap();
        settings.auth.users.push(UserCredentials {
            email: TEST_EMAIL.to_string(),
            password: Secret::new(TEST_PASSWORD.to_string()),
        });

        let login_router = build_login_router(&settings).unwrap();
        Self::spawn(login_router, &settings.server.login_path).await
    }

    /// Serve an arbitrary router on `login_path`
    pub async fn spawn<A, V>(login_router: LoginRouter<A, V>, login_path: &str) -> Self
    where
        A: AuthUseCase + 'static,
        V: EmailValidator + 'static,
    {
        let listener = TcpListener::bind(APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = LoginService::new(login_router, login_path).unwrap();
        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            login_path: login_path.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}{}", self.address, self.login_path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, self.login_path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
