use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object)]
pub struct SignupResponseDto {
    pub ok: bool,
    pub email: String,
    pub id: i64,
}

#[derive(ApiResponse)]
pub enum SubmitSignupResponse {
    /// Returned for brand-new and already-known emails alike.
    #[oai(status = 201)]
    Created(Json<SignupResponseDto>),
}

#[derive(Object)]
pub struct SignupRecordDto {
    pub id: i64,
    pub email: String,
    pub created_at: String,
}

#[derive(Object)]
pub struct SignupListDto {
    pub count: u64,
    pub signups: Vec<SignupRecordDto>,
}

#[derive(Object)]
pub struct HealthStatusDto {
    pub ok: bool,
}
