use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{models::Signup, repositories::SignupRepository};

#[derive(Default)]
pub struct InMemorySignupRepository {
    signups: Arc<RwLock<Vec<Signup>>>,
}

impl InMemorySignupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SignupRepository for InMemorySignupRepository {
    async fn insert_if_absent(
        &self,
        email: &str,
        created_at: DateTime<Utc>,
    ) -> anyhow::Result<Signup> {
        let mut signups = self.signups.write().await;
        if let Some(existing) = signups.iter().find(|s| s.email == email) {
            return Ok(existing.clone());
        }

        let signup = Signup {
            id: signups.len() as i64 + 1,
            email: email.to_string(),
            created_at,
        };
        signups.push(signup.clone());
        Ok(signup)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Signup>> {
        let signups = self.signups.read().await;
        Ok(signups.iter().rev().cloned().collect())
    }
}
