use crate::{domain::models::Signup, presentation::http::responses::SignupRecordDto};

pub fn map_signup(signup: &Signup) -> SignupRecordDto {
    SignupRecordDto {
        id: signup.id,
        email: signup.email.clone(),
        created_at: signup.created_at.to_rfc3339(),
    }
}
