use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Response, Route};
use poem_openapi::OpenApiService;

use crate::presentation::http::{
    cors::CrossOrigin,
    endpoints::{
        admin::AdminEndpoints, health::HealthEndpoints, root::ApiState, signup::SignupEndpoints,
    },
    errors::error_response,
};

pub mod cors;
pub mod endpoints;
pub mod errors;
pub mod mappers;
pub mod requests;
pub mod responses;
pub mod security;

pub fn build_route(state: Arc<ApiState>, server_url: &str) -> impl Endpoint<Output = Response> + use<> {
    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            SignupEndpoints::new(state.clone()),
            AdminEndpoints::new(state),
        ),
        "Signups API",
        "0.1.0",
    )
    .server(server_url.to_string());

    Route::new()
        .nest("/", api_service)
        .catch_all_error(error_response)
        .with(CrossOrigin)
}
