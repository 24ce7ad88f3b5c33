use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::models::Signup;

#[async_trait]
pub trait SignupRepository: Send + Sync {
    /// Inserts a new signup unless one already exists for `email`; returns
    /// the stored record either way.
    async fn insert_if_absent(
        &self,
        email: &str,
        created_at: DateTime<Utc>,
    ) -> anyhow::Result<Signup>;

    /// All signups, newest first.
    async fn list_all(&self) -> anyhow::Result<Vec<Signup>>;
}
