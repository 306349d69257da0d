use crate::{
    domain::common::{NutrilensConfig, services::Service},
    infrastructure::{
        history::http_history_store::HttpHistoryStore, llm::gemini_client::GeminiLLMClient,
        product::chained::ChainedProductSource,
    },
};

pub type NutrilensService = Service<GeminiLLMClient, ChainedProductSource, HttpHistoryStore>;

pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, anyhow::Error> {
    let llm_client = match config.llm.gemini_api_key.filter(|key| !key.trim().is_empty()) {
        Some(api_key) => {
            tracing::info!(model = %config.llm.gemini_model, "Gemini analysis enabled");
            Some(GeminiLLMClient::new(api_key, config.llm.gemini_model))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, dietary analyses use the rule-based path");
            None
        }
    };

    let product_source = ChainedProductSource::from_config(&config.product_sources)?;
    let history_store = HttpHistoryStore::new(&config.history_store)?;

    Ok(Service::new(
        llm_client,
        product_source,
        history_store,
        config.llm.timeout,
    ))
}
