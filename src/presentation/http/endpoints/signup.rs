use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::submit_signup::SubmitSignupRequest,
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::SignupRequestDto,
        responses::{SignupResponseDto, SubmitSignupResponse},
    },
};

pub struct SignupEndpoints {
    state: Arc<ApiState>,
}

impl SignupEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl SignupEndpoints {
    #[oai(path = "/api/signup", method = "post", tag = EndpointsTags::Signups)]
    pub async fn submit_signup(
        &self,
        request: Json<SignupRequestDto>,
    ) -> poem::Result<SubmitSignupResponse> {
        let email = request
            .email
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        let signup = self
            .state
            .submit_signup_usecase
            .execute(SubmitSignupRequest { email })
            .await
            .map_err(domain_error)?;

        Ok(SubmitSignupResponse::Created(Json(SignupResponseDto {
            ok: true,
            email: signup.email,
            id: signup.id,
        })))
    }
}

fn domain_error(err: DomainError) -> poem::Error {
    match err {
        DomainError::Validation(message) => {
            poem::Error::from_string(message, poem::http::StatusCode::BAD_REQUEST)
        }
        DomainError::Other(err) => poem::Error::from_string(
            format!("Server error: {err}"),
            poem::http::StatusCode::INTERNAL_SERVER_ERROR,
        ),
    }
}
