use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    list_signups::ListSignupsUseCase, submit_signup::SubmitSignupUseCase,
};
use crate::presentation::http::security::AdminCredentials;

#[derive(Clone)]
pub struct ApiState {
    pub submit_signup_usecase: Arc<SubmitSignupUseCase>,
    pub list_signups_usecase: Arc<ListSignupsUseCase>,
    pub admin_credentials: AdminCredentials,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Signups,
    Admin,
}
