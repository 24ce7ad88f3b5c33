//! Shared harness for HTTP surface tests: every case gets its own service
//! instance wired to a throwaway SQLite file.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use poem::{Endpoint, Response, test::TestClient};
use tempfile::TempDir;

use signups::{
    application::usecases::{list_signups::ListSignupsUseCase, submit_signup::SubmitSignupUseCase},
    domain::{models::Signup, repositories::SignupRepository},
    infrastructure::repositories::sqlite::{self, SqliteSignupRepository},
    presentation::http::{build_route, endpoints::root::ApiState, security::AdminCredentials},
};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "sup3r-secret";

pub async fn test_app() -> (TestClient<impl Endpoint<Output = Response>>, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("signups.db");
    let pool = sqlite::connect(path.to_str().expect("utf-8 path"))
        .await
        .expect("connect");
    sqlite::ensure_schema(&pool).await.expect("schema");

    let repo = SqliteSignupRepository::new(pool);
    let client = TestClient::new(build_route(
        state_with(repo.clone() as Arc<dyn SignupRepository>),
        "http://localhost:5050",
    ));
    (client, dir)
}

/// Service whose store always fails; health must stay green while the
/// storage-backed operations surface 500s.
pub fn broken_app() -> TestClient<impl Endpoint<Output = Response>> {
    let repo: Arc<dyn SignupRepository> = Arc::new(FailingSignupRepository);
    TestClient::new(build_route(state_with(repo), "http://localhost:5050"))
}

fn state_with(repo: Arc<dyn SignupRepository>) -> Arc<ApiState> {
    Arc::new(ApiState {
        submit_signup_usecase: Arc::new(SubmitSignupUseCase::new(repo.clone())),
        list_signups_usecase: Arc::new(ListSignupsUseCase::new(repo)),
        admin_credentials: AdminCredentials {
            username: ADMIN_USER.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    })
}

pub struct FailingSignupRepository;

#[async_trait]
impl SignupRepository for FailingSignupRepository {
    async fn insert_if_absent(
        &self,
        _email: &str,
        _created_at: DateTime<Utc>,
    ) -> anyhow::Result<Signup> {
        anyhow::bail!("store unavailable")
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Signup>> {
        anyhow::bail!("store unavailable")
    }
}

pub fn basic_auth(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}
