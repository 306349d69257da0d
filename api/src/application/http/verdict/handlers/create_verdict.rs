use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::verdict::validators::CreateVerdictValidator;
use nutrilens_core::domain::{
    restriction::registry::get_profile,
    verdict::{entities::ProductVerdict, services::analyze_ingredients},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateVerdictResponse {
    pub data: ProductVerdict,
}

#[utoipa::path(
    post,
    path = "",
    tag = "verdict",
    summary = "Grade an ingredient list",
    description = "Classifies each ingredient against a named profile or a set of toggles and folds the flags into one verdict.",
    responses(
        (status = 200, body = CreateVerdictResponse),
        (status = 400, description = "Neither or both of profile_id and toggles were given"),
        (status = 404, description = "Unknown profile")
    ),
    request_body = CreateVerdictValidator
)]
pub async fn create_verdict(
    ValidateJson(payload): ValidateJson<CreateVerdictValidator>,
) -> Result<Response<CreateVerdictResponse>, ApiError> {
    let ingredients = payload.ingredients.into_list();

    let verdict = match (payload.profile_id, payload.toggles) {
        (Some(profile_id), None) => {
            let profile = get_profile(&profile_id)
                .ok_or_else(|| ApiError::NotFound(format!("Unknown profile: {profile_id}")))?;
            analyze_ingredients(&ingredients, profile)
        }
        (None, Some(toggles)) => analyze_ingredients(&ingredients, &toggles.to_profile()),
        _ => {
            return Err(ApiError::BadRequest(
                "Provide exactly one of profile_id or toggles".to_string(),
            ));
        }
    };

    Ok(Response::OK(CreateVerdictResponse { data: verdict }))
}
