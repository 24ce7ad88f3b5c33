use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{endpoints::root::EndpointsTags, responses::HealthStatusDto};

pub struct HealthEndpoints;

#[OpenApi]
impl HealthEndpoints {
    /// Liveness probe; never touches the store.
    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> Json<HealthStatusDto> {
        Json(HealthStatusDto { ok: true })
    }
}
