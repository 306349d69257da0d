use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity of a single ingredient. Declaration order is the severity order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FlagLevel {
    Safe,
    Caution,
    Avoid,
}

impl FlagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagLevel::Safe => "safe",
            FlagLevel::Caution => "caution",
            FlagLevel::Avoid => "avoid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientFlag {
    pub ingredient: String,
    pub flag: FlagLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl IngredientFlag {
    pub fn safe(ingredient: &str) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            flag: FlagLevel::Safe,
            reason: None,
        }
    }

    pub fn with_reasons(ingredient: &str, flag: FlagLevel, reasons: &[String]) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            flag,
            reason: Some(reasons.join(", ")),
        }
    }
}
