use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    errors::DomainError, models::Signup, repositories::SignupRepository,
    value_objects::EmailAddress,
};

pub struct SubmitSignupUseCase {
    repo: Arc<dyn SignupRepository>,
}

pub struct SubmitSignupRequest {
    pub email: String,
}

impl SubmitSignupUseCase {
    pub fn new(repo: Arc<dyn SignupRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, request: SubmitSignupRequest) -> Result<Signup, DomainError> {
        let email = EmailAddress::parse(&request.email)?;
        let signup = self
            .repo
            .insert_if_absent(email.as_str(), Utc::now())
            .await?;
        Ok(signup)
    }
}
