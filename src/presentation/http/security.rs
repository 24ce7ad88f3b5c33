use poem::{Error as PoemError, Result as PoemResult, http::StatusCode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Basic;

/// Challenge sent alongside every 401 so callers know how to authenticate.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"Signups Admin\"";

#[derive(SecurityScheme)]
#[oai(ty = "basic")]
pub struct AdminAuth(pub Basic);

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminAuth {
    pub fn require(&self, expected: &AdminCredentials) -> PoemResult<()> {
        if self.0.username == expected.username && self.0.password == expected.password {
            Ok(())
        } else {
            Err(PoemError::from_string(
                "Unauthorized",
                StatusCode::UNAUTHORIZED,
            ))
        }
    }
}
