use reqwest::Client;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{entities::Product, value_objects::ProductProvider},
    },
    infrastructure::product::{fetch_json, first_food, mappers::normalize},
};

#[derive(Debug, Clone)]
pub struct UsdaSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl UsdaSource {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub async fn lookup(&self, barcode: &str) -> Result<Option<Product>, CoreError> {
        let url = format!(
            "{}/fdc/v1/foods/search?query={}&api_key={}",
            self.base_url,
            urlencoding::encode(barcode),
            urlencoding::encode(&self.api_key)
        );

        let body = fetch_json(self.client.get(&url), ProductProvider::Usda).await?;
        Ok(body.and_then(first_food).map(|raw| {
            let mut product = normalize(&raw, ProductProvider::Usda);
            if product.barcode.is_none() {
                product.barcode = Some(barcode.to_string());
            }
            product
        }))
    }
}
