use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::product::entities::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeDietInput {
    pub product: Product,
    pub profile_id: String,
    /// Record the outcome in the scan history once computed.
    pub save: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRisksInput {
    pub ingredients: Vec<String>,
    pub profile_id: String,
}

/// Identity of one (product, profile) evaluation: `<product name>_<profile id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisKey(String);

impl AnalysisKey {
    pub fn new(product_name: &str, profile_id: &str) -> Self {
        Self(format!("{product_name}_{profile_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
