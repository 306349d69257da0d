use super::handlers::create_history_entry::{__path_create_history_entry, create_history_entry};
use super::handlers::get_history::{__path_get_history, get_history};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_history, create_history_entry))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/history", state.args.server.root_path),
        get(get_history).post(create_history_entry),
    )
}
