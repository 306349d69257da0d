use reqwest::Client;
use tracing::{debug, error, info};

use crate::{
    domain::{
        common::{ProductSourcesConfig, entities::app_errors::CoreError},
        product::{entities::Product, ports::ProductSource, value_objects::ProductProvider},
    },
    infrastructure::product::{
        nutritionix::NutritionixSource, open_food_facts::OpenFoodFactsSource, usda::UsdaSource,
    },
};

#[derive(Debug, Clone)]
pub enum ProviderClient {
    OpenFoodFacts(OpenFoodFactsSource),
    Nutritionix(NutritionixSource),
    Usda(UsdaSource),
}

impl ProviderClient {
    pub fn provider(&self) -> ProductProvider {
        match self {
            ProviderClient::OpenFoodFacts(_) => ProductProvider::OpenFoodFacts,
            ProviderClient::Nutritionix(_) => ProductProvider::Nutritionix,
            ProviderClient::Usda(_) => ProductProvider::Usda,
        }
    }

    async fn lookup(&self, barcode: &str) -> Result<Option<Product>, CoreError> {
        match self {
            ProviderClient::OpenFoodFacts(source) => source.lookup(barcode).await,
            ProviderClient::Nutritionix(source) => source.lookup(barcode).await,
            ProviderClient::Usda(source) => source.lookup(barcode).await,
        }
    }
}

/// Tries each provider in order and returns the first hit.
#[derive(Debug, Clone)]
pub struct ChainedProductSource {
    providers: Vec<ProviderClient>,
}

impl ChainedProductSource {
    pub fn new(providers: Vec<ProviderClient>) -> Self {
        Self { providers }
    }

    /// OpenFoodFacts is always queried; Nutritionix and USDA only when their
    /// credentials are configured.
    pub fn from_config(config: &ProductSourcesConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                error!("Failed to build product source HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        let mut providers = vec![ProviderClient::OpenFoodFacts(OpenFoodFactsSource::new(
            client.clone(),
            config.open_food_facts_url.as_str(),
        ))];

        match (&config.nutritionix_app_id, &config.nutritionix_app_key) {
            (Some(app_id), Some(app_key)) => {
                providers.push(ProviderClient::Nutritionix(NutritionixSource::new(
                    client.clone(),
                    config.nutritionix_url.as_str(),
                    app_id.as_str(),
                    app_key.as_str(),
                )))
            }
            _ => info!("Nutritionix credentials missing, provider disabled"),
        }

        match &config.usda_api_key {
            Some(api_key) => providers.push(ProviderClient::Usda(UsdaSource::new(
                client,
                config.usda_url.as_str(),
                api_key.as_str(),
            ))),
            None => info!("USDA API key missing, provider disabled"),
        }

        Ok(Self::new(providers))
    }

    pub fn providers(&self) -> impl Iterator<Item = ProductProvider> + '_ {
        self.providers.iter().map(ProviderClient::provider)
    }
}

impl ProductSource for ChainedProductSource {
    async fn lookup_barcode(&self, barcode: &str) -> Result<Option<Product>, CoreError> {
        for client in &self.providers {
            let provider = client.provider().display_name();
            match client.lookup(barcode).await {
                Ok(Some(product)) => {
                    info!(provider, barcode, "product found");
                    return Ok(Some(product));
                }
                Ok(None) => debug!(provider, barcode, "product not known to provider"),
                Err(e) => error!(provider, barcode, error = %e, "provider lookup failed"),
            }
        }

        Ok(None)
    }
}
