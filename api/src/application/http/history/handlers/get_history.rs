use crate::application::http::history::validators::HistoryQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use nutrilens_core::domain::history::{entities::HistoryRow, ports::ScanHistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    pub data: Vec<HistoryRow>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Recent scans",
    params(HistoryQuery),
    responses(
        (status = 200, body = GetHistoryResponse),
        (status = 400, description = "limit is zero"),
        (status = 502, description = "History store unavailable")
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let rows = state
        .service
        .recent_scans(query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: rows }))
}
