use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::get_profile_explanation::{
    __path_get_profile_explanation, get_profile_explanation,
};
use super::handlers::get_profiles::{__path_get_profiles, get_profiles};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profiles, get_profile, get_profile_explanation))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles", state.args.server.root_path),
            get(get_profiles),
        )
        .route(
            &format!("{}/profiles/{{profile_id}}", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!(
                "{}/profiles/{{profile_id}}/explanation",
                state.args.server.root_path
            ),
            get(get_profile_explanation),
        )
}
