use crate::application::http::dietary_analysis::validators::AnalyzeDietaryCompatibilityValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use nutrilens_core::domain::dietary_analysis::{
    entities::DietaryAnalysis, ports::DietaryAnalysisService, value_objects::AnalyzeDietInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeDietaryCompatibilityResponse {
    pub data: DietaryAnalysis,
}

#[utoipa::path(
    post,
    path = "",
    tag = "dietary-analysis",
    summary = "Analyze a product against a diet",
    description = "Asks the configured model for a compatibility analysis and degrades to the rule-based analysis when the model is missing, slow or unreadable.",
    responses(
        (status = 200, body = AnalyzeDietaryCompatibilityResponse),
        (status = 400, description = "Product name is blank"),
        (status = 404, description = "Unknown profile"),
        (status = 409, description = "The same product and profile are already being analyzed")
    ),
    request_body = AnalyzeDietaryCompatibilityValidator
)]
pub async fn analyze_dietary_compatibility(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeDietaryCompatibilityValidator>,
) -> Result<Response<AnalyzeDietaryCompatibilityResponse>, ApiError> {
    if payload.product.name.trim().is_empty() {
        return Err(ApiError::BadRequest("product name is required".to_string()));
    }

    let analysis = state
        .service
        .analyze_dietary_compatibility(AnalyzeDietInput {
            product: payload.product.into(),
            profile_id: payload.profile_id,
            save: payload.save,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeDietaryCompatibilityResponse { data: analysis }))
}
