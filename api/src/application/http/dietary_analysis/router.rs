use super::handlers::analyze_dietary_compatibility::{
    __path_analyze_dietary_compatibility, analyze_dietary_compatibility,
};
use super::handlers::analyze_ingredient_risks::{
    __path_analyze_ingredient_risks, analyze_ingredient_risks,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_dietary_compatibility, analyze_ingredient_risks))]
pub struct DietaryAnalysisApiDoc;

pub fn dietary_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dietary-analysis", state.args.server.root_path),
            post(analyze_dietary_compatibility),
        )
        .route(
            &format!(
                "{}/dietary-analysis/ingredients",
                state.args.server.root_path
            ),
            post(analyze_ingredient_risks),
        )
}
