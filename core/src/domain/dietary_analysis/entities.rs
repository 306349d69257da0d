use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ingredient::entities::FlagLevel, product::entities::Nutrient};

const INCOMPATIBLE_SCORE: u8 = 20;
const COMPATIBLE_WITH_WARNINGS_SCORE: u8 = 70;
const COMPATIBLE_SCORE: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Which tier produced a dietary analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Delegated,
    TextHeuristic,
    RuleBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConcernSeverity {
    Low,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientConcern {
    pub nutrient: Nutrient,
    pub value: f64,
    pub limit: f64,
    pub severity: ConcernSeverity,
}

impl NutrientConcern {
    pub fn describe(&self) -> String {
        match self.severity {
            ConcernSeverity::Low => format!(
                "Low {}: {} is below the minimum of {}",
                self.nutrient.label(),
                self.value,
                self.limit
            ),
            ConcernSeverity::Warning | ConcernSeverity::Critical => format!(
                "High {}: {} exceeds the limit of {}",
                self.nutrient.label(),
                self.value,
                self.limit
            ),
        }
    }
}

/// Compatibility of one product with one restriction profile.
///
/// `risk_level` and `compatibility_score` are always derived from
/// `is_compatible` and `warnings`; build values through [`DietaryAnalysis::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietaryAnalysis {
    pub is_compatible: bool,
    pub risk_level: RiskLevel,
    pub compatibility_score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<String>,
    pub nutrient_concerns: Vec<NutrientConcern>,
    pub source: AnalysisSource,
}

impl DietaryAnalysis {
    pub fn new(
        is_compatible: bool,
        reasons: Vec<String>,
        warnings: Vec<String>,
        recommendations: Vec<String>,
        source: AnalysisSource,
    ) -> Self {
        let (risk_level, compatibility_score) = risk_band(is_compatible, !warnings.is_empty());
        Self {
            is_compatible,
            risk_level,
            compatibility_score,
            reasons,
            warnings,
            recommendations,
            alternatives: Vec::new(),
            nutrient_concerns: Vec::new(),
            source,
        }
    }

    pub fn with_alternatives(mut self, alternatives: Vec<String>) -> Self {
        self.alternatives = alternatives;
        self
    }

    pub fn with_nutrient_concerns(mut self, concerns: Vec<NutrientConcern>) -> Self {
        self.nutrient_concerns = concerns;
        self
    }

    /// Recomputes the band of a value that did not come from [`DietaryAnalysis::new`],
    /// e.g. one deserialized from a request body.
    pub fn rebanded(mut self) -> Self {
        let (risk_level, compatibility_score) =
            risk_band(self.is_compatible, !self.warnings.is_empty());
        self.risk_level = risk_level;
        self.compatibility_score = compatibility_score;
        self
    }
}

/// Risk of one ingredient in the ingredient breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientRiskLevel {
    Low,
    Moderate,
    High,
}

impl IngredientRiskLevel {
    /// Reads a level written by the model. `medium` is accepted for `moderate`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(IngredientRiskLevel::High),
            "moderate" | "medium" => Some(IngredientRiskLevel::Moderate),
            "low" => Some(IngredientRiskLevel::Low),
            _ => None,
        }
    }
}

impl From<FlagLevel> for IngredientRiskLevel {
    fn from(flag: FlagLevel) -> Self {
        match flag {
            FlagLevel::Avoid => IngredientRiskLevel::High,
            FlagLevel::Caution => IngredientRiskLevel::Moderate,
            FlagLevel::Safe => IngredientRiskLevel::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientRisk {
    pub name: String,
    /// Ingredient type, e.g. "Preservative" or "Sweetener".
    pub category: String,
    pub risk_level: IngredientRiskLevel,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientRiskReport {
    pub risks: Vec<IngredientRisk>,
    pub source: AnalysisSource,
}

/// Maps compatibility and the presence of warnings onto a risk band.
pub fn risk_band(is_compatible: bool, has_warnings: bool) -> (RiskLevel, u8) {
    match (is_compatible, has_warnings) {
        (false, _) => (RiskLevel::High, INCOMPATIBLE_SCORE),
        (true, true) => (RiskLevel::Medium, COMPATIBLE_WITH_WARNINGS_SCORE),
        (true, false) => (RiskLevel::Low, COMPATIBLE_SCORE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band() {
        assert_eq!(risk_band(false, false), (RiskLevel::High, 20));
        assert_eq!(risk_band(false, true), (RiskLevel::High, 20));
        assert_eq!(risk_band(true, true), (RiskLevel::Medium, 70));
        assert_eq!(risk_band(true, false), (RiskLevel::Low, 90));
    }

    #[test]
    fn test_rebanded_overrides_foreign_band() {
        let mut analysis = DietaryAnalysis::new(
            false,
            vec!["Contains milk".to_string()],
            Vec::new(),
            Vec::new(),
            AnalysisSource::Delegated,
        );
        analysis.risk_level = RiskLevel::Low;
        analysis.compatibility_score = 90;

        let analysis = analysis.rebanded();
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.compatibility_score, 20);
    }

    #[test]
    fn test_new_derives_band_from_warnings() {
        let analysis = DietaryAnalysis::new(
            true,
            vec![],
            vec!["Contains spices".to_string()],
            vec![],
            AnalysisSource::Delegated,
        );
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.compatibility_score, 70);
    }

    #[test]
    fn test_concern_description() {
        let concern = NutrientConcern {
            nutrient: Nutrient::SaturatedFat,
            value: 12.5,
            limit: 5.0,
            severity: ConcernSeverity::Critical,
        };
        assert_eq!(
            concern.describe(),
            "High saturated fat: 12.5 exceeds the limit of 5"
        );
    }
}
