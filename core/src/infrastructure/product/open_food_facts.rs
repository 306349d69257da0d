use reqwest::Client;
use serde_json::Value;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{entities::Product, value_objects::ProductProvider},
    },
    infrastructure::product::{fetch_json, mappers::normalize},
};

#[derive(Debug, Clone)]
pub struct OpenFoodFactsSource {
    client: Client,
    base_url: String,
}

impl OpenFoodFactsSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn lookup(&self, barcode: &str) -> Result<Option<Product>, CoreError> {
        let url = format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(barcode)
        );

        let body = fetch_json(self.client.get(&url), ProductProvider::OpenFoodFacts).await?;
        Ok(body.and_then(found_product).map(|raw| {
            let mut product = normalize(&raw, ProductProvider::OpenFoodFacts);
            if product.barcode.is_none() {
                product.barcode = Some(barcode.to_string());
            }
            product
        }))
    }
}

/// `status == 1` marks a hit; anything else is an unknown barcode.
fn found_product(body: Value) -> Option<Value> {
    let found = body.get("status").and_then(Value::as_i64) == Some(1);
    match body {
        Value::Object(mut map) if found => map.remove("product"),
        _ => None,
    }
}
