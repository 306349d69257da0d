use nutrilens_core::domain::{
    product::value_objects::IngredientsInput, restriction::toggles::DietToggles,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Ingredients plus exactly one of a named profile or a set of toggles.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVerdictValidator {
    #[serde(default)]
    pub ingredients: IngredientsInput,

    #[serde(default)]
    #[validate(length(min = 1, message = "profile_id must not be empty"))]
    pub profile_id: Option<String>,

    #[serde(default)]
    pub toggles: Option<DietToggles>,
}
