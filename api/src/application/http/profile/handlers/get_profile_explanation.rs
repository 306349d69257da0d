use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use nutrilens_core::domain::dietary_analysis::ports::DietaryAnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileExplanationResponse {
    pub data: String,
}

#[utoipa::path(
    get,
    path = "/{profile_id}/explanation",
    tag = "profile",
    summary = "Explain a restriction profile",
    description = "Plain-language explanation of the diet. Falls back to the profile description when no model is available.",
    params(
        ("profile_id" = String, Path, description = "Profile identifier"),
    ),
    responses(
        (status = 200, body = GetProfileExplanationResponse),
        (status = 404, description = "Unknown profile")
    ),
)]
pub async fn get_profile_explanation(
    Path(profile_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileExplanationResponse>, ApiError> {
    let explanation = state
        .service
        .explain_restriction(profile_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileExplanationResponse { data: explanation }))
}
