use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_signup,
    responses::SignupListDto,
    security::AdminAuth,
};

pub struct AdminEndpoints {
    state: Arc<ApiState>,
}

impl AdminEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AdminEndpoints {
    #[oai(path = "/admin/signups", method = "get", tag = EndpointsTags::Admin)]
    pub async fn list_signups(&self, auth: AdminAuth) -> poem::Result<Json<SignupListDto>> {
        auth.require(&self.state.admin_credentials)?;

        let signups = self
            .state
            .list_signups_usecase
            .execute()
            .await
            .map_err(internal_error)?;

        Ok(Json(SignupListDto {
            count: signups.len() as u64,
            signups: signups.iter().map(map_signup).collect(),
        }))
    }
}

fn internal_error(err: anyhow::Error) -> poem::Error {
    poem::Error::from_string(
        format!("Server error: {err}"),
        poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    )
}
