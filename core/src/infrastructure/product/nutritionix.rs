use reqwest::Client;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{entities::Product, value_objects::ProductProvider},
    },
    infrastructure::product::{fetch_json, first_food, mappers::normalize},
};

#[derive(Debug, Clone)]
pub struct NutritionixSource {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl NutritionixSource {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    pub async fn lookup(&self, barcode: &str) -> Result<Option<Product>, CoreError> {
        let url = format!(
            "{}/v2/search/item?upc={}",
            self.base_url,
            urlencoding::encode(barcode)
        );

        let request = self
            .client
            .get(&url)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key);

        let body = fetch_json(request, ProductProvider::Nutritionix).await?;
        Ok(body.and_then(first_food).map(|raw| {
            let mut product = normalize(&raw, ProductProvider::Nutritionix);
            if product.barcode.is_none() {
                product.barcode = Some(barcode.to_string());
            }
            product
        }))
    }
}
