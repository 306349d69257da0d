use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use nutrilens_core::domain::restriction::{entities::RestrictionProfile, registry::list_profiles};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfilesResponse {
    pub data: Vec<RestrictionProfile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "List restriction profiles",
    description = "Lists every named diet and every single-category toggle profile.",
    responses(
        (status = 200, body = GetProfilesResponse)
    ),
)]
pub async fn get_profiles() -> Result<Response<GetProfilesResponse>, ApiError> {
    Ok(Response::OK(GetProfilesResponse {
        data: list_profiles().to_vec(),
    }))
}
