use std::path::PathBuf;
use std::sync::Arc;

use auth::TokenConfig;
use auth::TokenService;
use chrono::Duration;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::audit::TracingAuditLog;
use identity_service::outbound::repositories::SqliteUserStore;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: TestDb,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

/// Test database helper backed by a throwaway SQLite file
pub struct TestDb {
    pub pool: SqlitePool,
    pub path: PathBuf,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let db = TestDb::new().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = TokenService::new(TokenConfig::new(
            TEST_JWT_SECRET,
            Duration::minutes(30),
        ));
        let user_store = Arc::new(SqliteUserStore::new(db.pool.clone()));
        let audit_log = Arc::new(TracingAuditLog::new());

        let auth_service = Arc::new(
            AuthService::new(user_store, audit_log, token_service)
                .expect("Failed to create auth service for tests"),
        );

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            db,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TokenConfig::new(
                TEST_JWT_SECRET,
                Duration::minutes(30),
            )),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&serde_json::json!({
                "email": email,
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request")
    }

    /// Log a user in and return the response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Register and log in, returning a usable access token
    pub async fn register_and_login(&self, email: &str, username: &str, password: &str) -> String {
        let response = self.register(email, username, password).await;
        assert_eq!(201, response.status().as_u16());

        let response = self.login(email, password).await;
        assert_eq!(200, response.status().as_u16());

        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["data"]["access_token"]
            .as_str()
            .expect("Login response missing access_token")
            .to_string()
    }
}

impl TestDb {
    /// Create a new test database as a unique temporary SQLite file
    pub async fn new() -> Self {
        let path = std::env::temp_dir().join(format!(
            "identity_service_test_{}.db",
            uuid::Uuid::new_v4().simple()
        ));
        let url = format!("sqlite:{}?mode=rwc", path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Failed to open test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool, path }
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Best effort; the journal files may not exist
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(self.path.with_extension("db-wal"));
        let _ = std::fs::remove_file(self.path.with_extension("db-shm"));
    }
}
