use std::time::Duration;

use chrono::{DateTime, Utc};

pub mod entities;
#[cfg(test)]
pub(crate) mod fakes;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub llm: LLMConfig,
    pub product_sources: ProductSourcesConfig,
    pub history_store: HistoryStoreConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// No key means every dietary analysis runs on the rule-based path.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ProductSourcesConfig {
    pub open_food_facts_url: String,
    pub nutritionix_url: String,
    pub nutritionix_app_id: Option<String>,
    pub nutritionix_app_key: Option<String>,
    pub usda_url: String,
    pub usda_api_key: Option<String>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

#[derive(Clone, Debug)]
pub struct HistoryStoreConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}
