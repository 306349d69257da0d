use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dietary_analysis::ports::LLMClient,
    history::ports::HistoryStore,
    product::{
        entities::Product,
        ports::{ProductLookupService, ProductSource},
    },
};

impl<LLM, PS, HS> ProductLookupService for Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    async fn find_product(&self, barcode: String) -> Result<Product, CoreError> {
        let barcode = barcode.trim();
        if barcode.is_empty() || !barcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Invalid);
        }

        self.product_source
            .lookup_barcode(barcode)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
