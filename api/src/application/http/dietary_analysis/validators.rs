use nutrilens_core::domain::product::value_objects::{IngredientsInput, ProductInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeDietaryCompatibilityValidator {
    pub product: ProductInput,

    #[validate(length(min = 1, message = "profile_id is required"))]
    pub profile_id: String,

    /// Also record the scan in the history store.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeIngredientRisksValidator {
    #[serde(default)]
    pub ingredients: IngredientsInput,

    #[validate(length(min = 1, message = "profile_id is required"))]
    pub profile_id: String,
}
