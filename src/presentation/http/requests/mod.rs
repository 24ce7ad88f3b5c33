use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct SignupRequestDto {
    /// Any JSON value is accepted; non-string values read as an empty
    /// submission during validation.
    pub email: Option<serde_json::Value>,
}
