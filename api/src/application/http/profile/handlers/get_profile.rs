use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use axum::extract::Path;
use nutrilens_core::domain::restriction::{
    entities::RestrictionProfile, registry::get_profile as find_profile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: RestrictionProfile,
}

#[utoipa::path(
    get,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Get restriction profile",
    params(
        ("profile_id" = String, Path, description = "Profile identifier, e.g. vegan or no-dairy"),
    ),
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, description = "Unknown profile")
    ),
)]
pub async fn get_profile(
    Path(profile_id): Path<String>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = find_profile(&profile_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown profile: {profile_id}")))?;

    Ok(Response::OK(GetProfileResponse {
        data: profile.clone(),
    }))
}
