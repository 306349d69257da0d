use tracing::{debug, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dietary_analysis::{entities::DietaryAnalysis, ports::LLMClient},
    history::{
        entities::{HistoryRow, ScanHistoryRecord, format_scan_history_record},
        ports::{HistoryStore, ScanHistoryService},
        value_objects::{DEFAULT_HISTORY_LIMIT, RecordScanInput},
    },
    product::{entities::Product, ports::ProductSource},
    restriction::{entities::RestrictionProfile, registry::get_profile},
};

impl<LLM, PS, HS> Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    /// Saves a scan without letting a store failure reach the caller.
    pub(crate) async fn save_scan_best_effort(
        &self,
        product: &Product,
        analysis: &DietaryAnalysis,
        profile: &RestrictionProfile,
    ) {
        let record = format_scan_history_record(product, analysis, profile);
        match self.history_store.save(HistoryRow::from(&record)).await {
            Ok(()) => debug!(product_key = %record.product_key, "scan saved to history"),
            Err(e) => warn!(
                product_key = %record.product_key,
                error = %e,
                "failed to save scan to history"
            ),
        }
    }
}

impl<LLM, PS, HS> ScanHistoryService for Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    async fn record_scan(&self, input: RecordScanInput) -> Result<ScanHistoryRecord, CoreError> {
        let profile = get_profile(&input.profile_id).ok_or(CoreError::NotFound)?;

        let analysis = input.analysis.rebanded();
        let record = format_scan_history_record(&input.product, &analysis, profile);
        self.history_store.save(HistoryRow::from(&record)).await?;

        Ok(record)
    }

    async fn recent_scans(&self, limit: Option<usize>) -> Result<Vec<HistoryRow>, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if limit == 0 {
            return Err(CoreError::Invalid);
        }

        let mut rows = self.history_store.recent(limit).await?;
        rows.truncate(limit);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        common::fakes::{FakeHistoryStore, FakeLLM, FakeProductSource},
        dietary_analysis::{entities::RiskLevel, fallback::fallback_analysis},
    };

    fn service_with(store: FakeHistoryStore) -> Service<FakeLLM, FakeProductSource, FakeHistoryStore> {
        Service::new(None, FakeProductSource::default(), store, Duration::from_secs(1))
    }

    fn scan(name: &str, profile_id: &str) -> RecordScanInput {
        let product = Product::new(name, vec!["Wheat flour".into(), "Water".into()]);
        let analysis = fallback_analysis(&product, get_profile(profile_id).unwrap());
        RecordScanInput {
            product,
            analysis,
            profile_id: profile_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_record_scan_persists_flat_row() {
        let store = FakeHistoryStore::default();
        let service = service_with(store.clone());

        let record = service.record_scan(scan("Bread", "gluten-free")).await.unwrap();
        assert_eq!(record.product_key, "Bread_gluten-free");

        let rows = store.saved();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_ingredients.as_deref(), Some("Wheat flour, Water"));
        assert_eq!(rows[0].warnings, "Contains wheat, Contains wheat flour");
    }

    #[tokio::test]
    async fn test_record_scan_rederives_submitted_band() {
        let store = FakeHistoryStore::default();
        let service = service_with(store.clone());

        let analysis: DietaryAnalysis = serde_json::from_value(serde_json::json!({
            "is_compatible": false,
            "risk_level": "low",
            "compatibility_score": 90,
            "reasons": ["Contains wheat"],
            "warnings": [],
            "recommendations": [],
            "alternatives": [],
            "nutrient_concerns": [],
            "source": "delegated"
        }))
        .unwrap();
        let mut input = scan("Bread", "gluten-free");
        input.analysis = analysis;

        let record = service.record_scan(input).await.unwrap();
        assert_eq!(record.analysis.risk_level, RiskLevel::High);
        assert_eq!(record.analysis.compatibility_score, 20);

        let rows = store.saved();
        assert!(!rows[0].is_compatible);
        assert_eq!(rows[0].risk_level, RiskLevel::High);
        assert_eq!(rows[0].compatibility_score, 20);
    }

    #[tokio::test]
    async fn test_record_scan_unknown_profile() {
        let service = service_with(FakeHistoryStore::default());
        let result = service.record_scan(scan("Bread", "gluten-free")).await;
        assert!(result.is_ok());

        let mut input = scan("Bread", "gluten-free");
        input.profile_id = "nope".to_string();
        assert_eq!(
            service.record_scan(input).await.map(|_| ()),
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_recent_scans_newest_first_and_limited() {
        let store = FakeHistoryStore::default();
        let service = service_with(store);
        for name in ["Bread", "Crackers", "Pasta"] {
            service.record_scan(scan(name, "gluten-free")).await.unwrap();
        }

        let rows = service.recent_scans(Some(2)).await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["Pasta", "Crackers"]);

        assert_eq!(service.recent_scans(None).await.unwrap().len(), 3);
        assert_eq!(service.recent_scans(Some(0)).await, Err(CoreError::Invalid));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_on_direct_calls() {
        let service = service_with(FakeHistoryStore::failing());
        let result = service.recent_scans(None).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
