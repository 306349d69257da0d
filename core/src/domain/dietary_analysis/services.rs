use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dietary_analysis::{
        entities::{AnalysisSource, DietaryAnalysis, IngredientRiskReport},
        fallback::{basic_ingredient_risks, fallback_analysis},
        parser::{ParsedReply, heuristic_analysis, parse_ingredient_risks, parse_reply},
        ports::{DietaryAnalysisService, LLMClient},
        prompt::{analysis_prompt, explanation_prompt, ingredient_risk_prompt},
        schema::{get_dietary_analysis_schema, get_ingredient_risks_schema},
        value_objects::{AnalysisKey, AnalyzeDietInput, IngredientRisksInput},
    },
    history::ports::HistoryStore,
    product::{entities::Product, ports::ProductSource},
    restriction::{entities::RestrictionProfile, registry::get_profile},
};

impl<LLM, PS, HS> DietaryAnalysisService for Service<LLM, PS, HS>
where
    LLM: LLMClient,
    PS: ProductSource,
    HS: HistoryStore,
{
    async fn analyze_dietary_compatibility(
        &self,
        input: AnalyzeDietInput,
    ) -> Result<DietaryAnalysis, CoreError> {
        let profile = get_profile(&input.profile_id).ok_or(CoreError::NotFound)?;
        let product = input.product;

        let analysis = match &self.llm_client {
            Some(llm) => {
                let key = AnalysisKey::new(&product.name, &profile.id);
                let _guard = self.in_flight.try_acquire(key.as_str()).ok_or_else(|| {
                    warn!(%key, "dietary analysis already in flight");
                    CoreError::Conflict
                })?;

                delegated_analysis(llm.as_ref(), &product, profile, self.analysis_timeout).await
            }
            None => {
                debug!(profile_id = %profile.id, "no LLM configured, using rule-based analysis");
                fallback_analysis(&product, profile)
            }
        };

        if input.save {
            self.save_scan_best_effort(&product, &analysis, profile)
                .await;
        }

        Ok(analysis)
    }

    async fn analyze_ingredient_risks(
        &self,
        input: IngredientRisksInput,
    ) -> Result<IngredientRiskReport, CoreError> {
        let profile = get_profile(&input.profile_id).ok_or(CoreError::NotFound)?;
        let ingredients: Vec<String> = input
            .ingredients
            .iter()
            .map(|ingredient| ingredient.trim().to_string())
            .filter(|ingredient| !ingredient.is_empty())
            .collect();

        let report = match &self.llm_client {
            Some(llm) if !ingredients.is_empty() => {
                delegated_ingredient_risks(
                    llm.as_ref(),
                    &ingredients,
                    profile,
                    self.analysis_timeout,
                )
                .await
            }
            _ => IngredientRiskReport {
                risks: basic_ingredient_risks(&ingredients, profile),
                source: AnalysisSource::RuleBased,
            },
        };

        Ok(report)
    }

    async fn explain_restriction(&self, profile_id: String) -> Result<String, CoreError> {
        let profile = get_profile(&profile_id).ok_or(CoreError::NotFound)?;
        let fallback = format!("{}: {}", profile.name, profile.description);

        let Some(llm) = &self.llm_client else {
            return Ok(fallback);
        };

        let call = llm.generate_with_text(explanation_prompt(profile), None);
        match timeout(self.analysis_timeout, call).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(Ok(_)) => {
                warn!(profile_id = %profile.id, "empty diet explanation from LLM");
                Ok(fallback)
            }
            Ok(Err(e)) => {
                error!(profile_id = %profile.id, error = %e, "diet explanation failed");
                Ok(fallback)
            }
            Err(_) => {
                warn!(profile_id = %profile.id, "diet explanation timed out");
                Ok(fallback)
            }
        }
    }
}

/// Asks the model, then degrades: structured reply, keyword heuristic on
/// prose, rule-based analysis on anything else.
pub async fn delegated_analysis<L: LLMClient>(
    llm: &L,
    product: &Product,
    profile: &RestrictionProfile,
    limit: Duration,
) -> DietaryAnalysis {
    let call = llm.generate_with_text(
        analysis_prompt(product, profile),
        Some(get_dietary_analysis_schema()),
    );

    let reply = match timeout(limit, call).await {
        Ok(Ok(reply)) => reply,
        Ok(Err(e)) => {
            error!(error = %e, "LLM call failed, using rule-based analysis");
            return fallback_analysis(product, profile);
        }
        Err(_) => {
            warn!(
                timeout_ms = limit.as_millis() as u64,
                "LLM call timed out, using rule-based analysis"
            );
            return fallback_analysis(product, profile);
        }
    };

    match parse_reply(&reply) {
        ParsedReply::Structured(parsed) => {
            debug!(is_compatible = parsed.is_compatible, "LLM reply parsed");
            parsed.into_analysis()
        }
        ParsedReply::Prose => {
            warn!("LLM reply carried no JSON, reading it with the keyword heuristic");
            heuristic_analysis(&reply)
        }
        ParsedReply::Malformed(reason) => {
            warn!(%reason, "malformed LLM reply, using rule-based analysis");
            fallback_analysis(product, profile)
        }
    }
}

/// Asks the model for a per-ingredient breakdown. Anything other than a
/// readable, non-empty array falls back to the classifier.
pub async fn delegated_ingredient_risks<L: LLMClient>(
    llm: &L,
    ingredients: &[String],
    profile: &RestrictionProfile,
    limit: Duration,
) -> IngredientRiskReport {
    let rule_based = || IngredientRiskReport {
        risks: basic_ingredient_risks(ingredients, profile),
        source: AnalysisSource::RuleBased,
    };

    let call = llm.generate_with_text(
        ingredient_risk_prompt(ingredients, profile),
        Some(get_ingredient_risks_schema()),
    );

    let reply = match timeout(limit, call).await {
        Ok(Ok(reply)) => reply,
        Ok(Err(e)) => {
            error!(error = %e, "ingredient risk call failed, using classifier");
            return rule_based();
        }
        Err(_) => {
            warn!(
                timeout_ms = limit.as_millis() as u64,
                "ingredient risk call timed out, using classifier"
            );
            return rule_based();
        }
    };

    match parse_ingredient_risks(&reply) {
        Ok(risks) if !risks.is_empty() => {
            debug!(count = risks.len(), "ingredient risks parsed");
            IngredientRiskReport {
                risks,
                source: AnalysisSource::Delegated,
            }
        }
        Ok(_) => {
            warn!("LLM returned no usable ingredient risks, using classifier");
            rule_based()
        }
        Err(reason) => {
            warn!(%reason, "unreadable ingredient risk reply, using classifier");
            rule_based()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::fakes::{FakeHistoryStore, FakeLLM, FakeProductSource, LlmBehaviour, service},
        dietary_analysis::entities::{IngredientRiskLevel, RiskLevel},
    };

    fn milk() -> Product {
        Product::new("Whole Milk", vec!["Organic Whole Milk".into(), "Vitamin D3".into()])
    }

    fn input(product: Product, profile_id: &str, save: bool) -> AnalyzeDietInput {
        AnalyzeDietInput {
            product,
            profile_id: profile_id.to_string(),
            save,
        }
    }

    fn rule_based(product: &Product, profile_id: &str) -> DietaryAnalysis {
        fallback_analysis(product, get_profile(profile_id).unwrap())
    }

    #[tokio::test]
    async fn test_without_llm_uses_rule_based_analysis() {
        let service = service(None);
        let analysis = service
            .analyze_dietary_compatibility(input(milk(), "vegan", false))
            .await
            .unwrap();
        assert_eq!(analysis, rule_based(&milk(), "vegan"));
    }

    #[tokio::test]
    async fn test_unknown_profile_is_not_found() {
        let service = service(None);
        let result = service
            .analyze_dietary_compatibility(input(milk(), "carnivore", false))
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_structured_reply_is_used() {
        let llm = FakeLLM::replying(
            r#"{"isCompatible": true, "warnings": [], "recommendations": ["Try Oatly Barista"]}"#,
        );
        let service = service(Some(llm));

        let analysis = service
            .analyze_dietary_compatibility(input(milk(), "vegan", false))
            .await
            .unwrap();
        assert_eq!(analysis.source, AnalysisSource::Delegated);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.recommendations, vec!["Try Oatly Barista"]);
    }

    #[tokio::test]
    async fn test_prose_reply_uses_heuristic() {
        let service = service(Some(FakeLLM::replying(
            "This milk is not suitable for vegans.",
        )));

        let analysis = service
            .analyze_dietary_compatibility(input(milk(), "vegan", false))
            .await
            .unwrap();
        assert_eq!(analysis.source, AnalysisSource::TextHeuristic);
        assert!(!analysis.is_compatible);
        assert_eq!(analysis.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let service = service(Some(FakeLLM::replying(r#"{"isCompatible": maybe}"#)));
        let analysis = service
            .analyze_dietary_compatibility(input(milk(), "vegan", false))
            .await
            .unwrap();
        assert_eq!(analysis, rule_based(&milk(), "vegan"));
    }

    #[tokio::test]
    async fn test_failed_call_falls_back() {
        let llm = FakeLLM::new(LlmBehaviour::Fail);
        let service = service(Some(llm.clone()));
        let analysis = service
            .analyze_dietary_compatibility(input(milk(), "vegan", false))
            .await
            .unwrap();
        assert_eq!(analysis, rule_based(&milk(), "vegan"));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let llm = FakeLLM::new(LlmBehaviour::Delayed(
            Duration::from_secs(10),
            r#"{"isCompatible": true}"#.to_string(),
        ));
        let analysis = delegated_analysis(
            &llm,
            &milk(),
            get_profile("vegan").unwrap(),
            Duration::from_millis(20),
        )
        .await;
        assert_eq!(analysis, rule_based(&milk(), "vegan"));
    }

    #[tokio::test]
    async fn test_duplicate_in_flight_is_conflict() {
        let llm = FakeLLM::new(LlmBehaviour::Delayed(
            Duration::from_millis(100),
            r#"{"isCompatible": false, "warnings": ["Contains milk"]}"#.to_string(),
        ));
        let service = service(Some(llm));

        let (first, second) = tokio::join!(
            service.analyze_dietary_compatibility(input(milk(), "vegan", false)),
            service.analyze_dietary_compatibility(input(milk(), "vegan", false)),
        );
        let conflicts = [&first, &second]
            .into_iter()
            .filter(|result| **result == Err(CoreError::Conflict))
            .count();
        assert_eq!(conflicts, 1);
        assert!(first.is_ok() || second.is_ok());

        let again = service
            .analyze_dietary_compatibility(input(milk(), "vegan", false))
            .await;
        assert!(again.is_ok());
    }

    #[tokio::test]
    async fn test_save_records_history() {
        let store = FakeHistoryStore::default();
        let service = Service::<FakeLLM, _, _>::new(
            None,
            FakeProductSource::default(),
            store.clone(),
            Duration::from_secs(1),
        );

        service
            .analyze_dietary_compatibility(input(milk(), "vegan", true))
            .await
            .unwrap();

        let rows = store.saved();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].diet_id, "vegan");
        assert!(!rows[0].is_compatible);
    }

    #[tokio::test]
    async fn test_history_failure_does_not_fail_analysis() {
        let service = Service::<FakeLLM, _, _>::new(
            None,
            FakeProductSource::default(),
            FakeHistoryStore::failing(),
            Duration::from_secs(1),
        );

        let analysis = service
            .analyze_dietary_compatibility(input(milk(), "vegan", true))
            .await;
        assert!(analysis.is_ok());
    }

    #[tokio::test]
    async fn test_explanation_fallback() {
        let offline = service(None);
        let text = offline.explain_restriction("keto".to_string()).await.unwrap();
        assert_eq!(text, "Ketogenic Diet: High fat, very low carb diet for ketosis");

        let failing = service(Some(FakeLLM::new(LlmBehaviour::Fail)));
        let text = failing.explain_restriction("keto".to_string()).await.unwrap();
        assert!(text.starts_with("Ketogenic Diet: "));
    }

    #[tokio::test]
    async fn test_explanation_from_llm() {
        let service = service(Some(FakeLLM::replying(
            "  Keto means eating very few carbs. Skip bread and candy!  ",
        )));
        let text = service.explain_restriction("keto".to_string()).await.unwrap();
        assert_eq!(text, "Keto means eating very few carbs. Skip bread and candy!");
    }

    fn risks_input(ingredients: &[&str], profile_id: &str) -> IngredientRisksInput {
        IngredientRisksInput {
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            profile_id: profile_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ingredient_risks_from_llm() {
        let llm = FakeLLM::replying(
            r#"Sure: [{"name": "Whey", "category": "Dairy protein", "riskLevel": "high", "reason": "Made from milk"},
               {"name": "Sugar", "category": "Sweetener", "riskLevel": "low", "reason": "Plant derived"}]"#,
        );
        let service = service(Some(llm.clone()));

        let report = service
            .analyze_ingredient_risks(risks_input(&["Whey", "Sugar"], "vegan"))
            .await
            .unwrap();
        assert_eq!(report.source, AnalysisSource::Delegated);
        assert_eq!(report.risks.len(), 2);
        assert_eq!(report.risks[0].category, "Dairy protein");
        assert_eq!(report.risks[0].risk_level, IngredientRiskLevel::High);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_ingredient_risks_without_llm_use_classifier() {
        let report = service(None)
            .analyze_ingredient_risks(risks_input(&["Whey", "Sugar"], "vegan"))
            .await
            .unwrap();
        assert_eq!(report.source, AnalysisSource::RuleBased);
        let vegan = get_profile("vegan").unwrap();
        assert_eq!(report.risks, basic_ingredient_risks(&["Whey", "Sugar"], vegan));
    }

    #[tokio::test]
    async fn test_ingredient_risks_fall_back_on_bad_replies() {
        let vegan = get_profile("vegan").unwrap();
        let expected = basic_ingredient_risks(&["Whey", "Sugar"], vegan);

        for llm in [
            FakeLLM::replying("Whey is not vegan, sugar is fine."),
            FakeLLM::replying("[]"),
            FakeLLM::new(LlmBehaviour::Fail),
        ] {
            let report = service(Some(llm))
                .analyze_ingredient_risks(risks_input(&["Whey", "Sugar"], "vegan"))
                .await
                .unwrap();
            assert_eq!(report.source, AnalysisSource::RuleBased);
            assert_eq!(report.risks, expected);
        }
    }

    #[tokio::test]
    async fn test_ingredient_risks_timeout_falls_back() {
        let llm = FakeLLM::new(LlmBehaviour::Delayed(
            Duration::from_secs(10),
            "[]".to_string(),
        ));
        let ingredients = vec!["Whey".to_string()];
        let vegan = get_profile("vegan").unwrap();

        let report =
            delegated_ingredient_risks(&llm, &ingredients, vegan, Duration::from_millis(20)).await;
        assert_eq!(report.source, AnalysisSource::RuleBased);
        assert_eq!(report.risks[0].risk_level, IngredientRiskLevel::High);
    }

    #[tokio::test]
    async fn test_ingredient_risks_edge_inputs() {
        let llm = FakeLLM::replying("[]");
        let service = service(Some(llm.clone()));

        let report = service
            .analyze_ingredient_risks(risks_input(&[" ", ""], "vegan"))
            .await
            .unwrap();
        assert!(report.risks.is_empty());
        assert_eq!(llm.calls(), 0);

        let result = service
            .analyze_ingredient_risks(risks_input(&["Whey"], "carnivore"))
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }
}
