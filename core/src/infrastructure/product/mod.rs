pub mod chained;
pub mod field_lookup;
pub mod mappers;
pub mod nutritionix;
pub mod open_food_facts;
pub mod usda;

use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError, product::value_objects::ProductProvider,
};

/// Sends a provider request. A 404 is an answer ("unknown barcode"), not a
/// failure.
async fn fetch_json(
    request: RequestBuilder,
    provider: ProductProvider,
) -> Result<Option<Value>, CoreError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("{} request failed: {}", provider.display_name(), e);
        CoreError::ExternalServiceError(format!("{} error: {}", provider.display_name(), e))
    })?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if !response.status().is_success() {
        let status = response.status();
        tracing::error!("{} returned {}", provider.display_name(), status);
        return Err(CoreError::ExternalServiceError(format!(
            "{} returned error: {}",
            provider.display_name(),
            status
        )));
    }

    response.json::<Value>().await.map(Some).map_err(|e| {
        tracing::error!("Failed to parse {} response: {}", provider.display_name(), e);
        CoreError::ExternalServiceError(format!(
            "Failed to parse {} response: {}",
            provider.display_name(),
            e
        ))
    })
}

/// First entry of a `foods` array, as returned by the search style APIs.
fn first_food(body: Value) -> Option<Value> {
    match body {
        Value::Object(mut map) => match map.remove("foods") {
            Some(Value::Array(foods)) => foods.into_iter().next(),
            _ => None,
        },
        _ => None,
    }
}
