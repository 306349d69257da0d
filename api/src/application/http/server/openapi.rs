use crate::application::http::{
    dietary_analysis::router::DietaryAnalysisApiDoc, health::HealthApiDoc,
    history::router::HistoryApiDoc, product::router::ProductApiDoc,
    profile::router::ProfileApiDoc, verdict::router::VerdictApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API"
    ),
    nest(
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/verdicts", api = VerdictApiDoc),
        (path = "/dietary-analysis", api = DietaryAnalysisApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
