use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dietary_analysis::{
        entities::{DietaryAnalysis, IngredientRiskReport},
        value_objects::{AnalyzeDietInput, IngredientRisksInput},
    },
};

/// Text generation backend.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// With a schema the model is asked for JSON matching it; without one the
    /// reply is free text.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DietaryAnalysisService: Send + Sync {
    /// Unknown profile ids yield `NotFound`; a duplicate of a pending analysis
    /// yields `Conflict`. Remote failures never surface.
    fn analyze_dietary_compatibility(
        &self,
        input: AnalyzeDietInput,
    ) -> impl Future<Output = Result<DietaryAnalysis, CoreError>> + Send;

    /// Per-ingredient risk breakdown. Falls back to the classifier when the
    /// model is missing, slow or unreadable.
    fn analyze_ingredient_risks(
        &self,
        input: IngredientRisksInput,
    ) -> impl Future<Output = Result<IngredientRiskReport, CoreError>> + Send;

    fn explain_restriction(
        &self,
        profile_id: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
