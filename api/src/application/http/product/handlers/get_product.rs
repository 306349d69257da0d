use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use nutrilens_core::domain::product::{
    entities::Product, ports::ProductLookupService, value_objects::health_warnings,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductResponse {
    pub data: Product,
    pub health_warnings: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/{barcode}",
    tag = "product",
    summary = "Look up a product by barcode",
    description = "Tries each configured product database in turn and returns the first normalized hit.",
    params(
        ("barcode" = String, Path, description = "EAN or UPC digits"),
    ),
    responses(
        (status = 200, body = GetProductResponse),
        (status = 400, description = "Barcode is not made of digits"),
        (status = 404, description = "No provider knows this barcode")
    ),
)]
pub async fn get_product(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetProductResponse>, ApiError> {
    let product = state
        .service
        .find_product(barcode)
        .await
        .map_err(ApiError::from)?;
    let health_warnings = health_warnings(&product.nutrition);

    Ok(Response::OK(GetProductResponse {
        data: product,
        health_warnings,
    }))
}
