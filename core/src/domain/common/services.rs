use std::{sync::Arc, time::Duration};

use crate::domain::{
    dietary_analysis::{in_flight::InFlightAnalyses, ports::LLMClient},
    history::ports::HistoryStore,
    product::ports::ProductSource,
};

/// Application service shared by every handler.
///
/// The LLM client is optional: without one, dietary analyses are answered by
/// the rule-based evaluator directly.
pub struct Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    pub(crate) llm_client: Option<Arc<LLM>>,
    pub(crate) product_source: Arc<PS>,
    pub(crate) history_store: Arc<HS>,
    pub(crate) in_flight: InFlightAnalyses,
    pub(crate) analysis_timeout: Duration,
}

impl<LLM, PS, HS> Clone for Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
            product_source: Arc::clone(&self.product_source),
            history_store: Arc::clone(&self.history_store),
            in_flight: self.in_flight.clone(),
            analysis_timeout: self.analysis_timeout,
        }
    }
}

impl<LLM, PS, HS> Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    pub fn new(
        llm_client: Option<LLM>,
        product_source: PS,
        history_store: HS,
        analysis_timeout: Duration,
    ) -> Self {
        Self {
            llm_client: llm_client.map(Arc::new),
            product_source: Arc::new(product_source),
            history_store: Arc::new(history_store),
            in_flight: InFlightAnalyses::default(),
            analysis_timeout,
        }
    }
}
