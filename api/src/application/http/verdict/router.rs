use super::handlers::create_verdict::{__path_create_verdict, create_verdict};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_verdict))]
pub struct VerdictApiDoc;

pub fn verdict_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/verdicts", state.args.server.root_path),
        post(create_verdict),
    )
}
