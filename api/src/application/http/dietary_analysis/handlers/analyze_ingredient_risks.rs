use crate::application::http::dietary_analysis::validators::AnalyzeIngredientRisksValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use nutrilens_core::domain::dietary_analysis::{
    entities::IngredientRiskReport, ports::DietaryAnalysisService,
    value_objects::IngredientRisksInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeIngredientRisksResponse {
    pub data: IngredientRiskReport,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "dietary-analysis",
    summary = "Per-ingredient risk breakdown",
    description = "Rates every ingredient high, moderate or low for the diet. Uses the ingredient classifier when the model is missing or its reply cannot be read.",
    responses(
        (status = 200, body = AnalyzeIngredientRisksResponse),
        (status = 404, description = "Unknown profile")
    ),
    request_body = AnalyzeIngredientRisksValidator
)]
pub async fn analyze_ingredient_risks(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientRisksValidator>,
) -> Result<Response<AnalyzeIngredientRisksResponse>, ApiError> {
    let report = state
        .service
        .analyze_ingredient_risks(IngredientRisksInput {
            ingredients: payload.ingredients.into_list(),
            profile_id: payload.profile_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientRisksResponse { data: report }))
}
