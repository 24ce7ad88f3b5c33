use std::sync::Arc;

use crate::domain::{models::Signup, repositories::SignupRepository};

pub struct ListSignupsUseCase {
    repo: Arc<dyn SignupRepository>,
}

impl ListSignupsUseCase {
    pub fn new(repo: Arc<dyn SignupRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self) -> anyhow::Result<Vec<Signup>> {
        self.repo.list_all().await
    }
}
