use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::{FlagLevel, IngredientFlag};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Good,
    Caution,
    Avoid,
}

impl From<FlagLevel> for Verdict {
    fn from(level: FlagLevel) -> Self {
        match level {
            FlagLevel::Safe => Verdict::Good,
            FlagLevel::Caution => Verdict::Caution,
            FlagLevel::Avoid => Verdict::Avoid,
        }
    }
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Good => "good",
            Verdict::Caution => "caution",
            Verdict::Avoid => "avoid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductVerdict {
    pub product_verdict: Verdict,
    pub summary_line: String,
    pub per_ingredient_flags: Vec<IngredientFlag>,
}

impl ProductVerdict {
    pub fn flags_at(&self, level: FlagLevel) -> impl Iterator<Item = &IngredientFlag> {
        self.per_ingredient_flags
            .iter()
            .filter(move |flag| flag.flag == level)
    }
}
