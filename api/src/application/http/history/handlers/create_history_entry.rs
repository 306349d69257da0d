use crate::application::http::history::validators::CreateHistoryEntryValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use nutrilens_core::domain::history::{
    entities::ScanHistoryRecord, ports::ScanHistoryService, value_objects::RecordScanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateHistoryEntryResponse {
    pub data: ScanHistoryRecord,
}

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Record a scan",
    description = "Stores an already analyzed product in the scan history.",
    responses(
        (status = 201, body = CreateHistoryEntryResponse),
        (status = 404, description = "Unknown profile"),
        (status = 502, description = "History store unavailable")
    ),
    request_body = CreateHistoryEntryValidator
)]
pub async fn create_history_entry(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateHistoryEntryValidator>,
) -> Result<Response<CreateHistoryEntryResponse>, ApiError> {
    let record = state
        .service
        .record_scan(RecordScanInput {
            product: payload.product.into(),
            analysis: payload.analysis,
            profile_id: payload.profile_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateHistoryEntryResponse { data: record }))
}
