use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::generate_timestamp,
    dietary_analysis::{entities::DietaryAnalysis, entities::RiskLevel, value_objects::AnalysisKey},
    product::entities::{Nutrition, Product},
    restriction::entities::RestrictionProfile,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestrictionSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&RestrictionProfile> for RestrictionSummary {
    fn from(profile: &RestrictionProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            description: profile.description.clone(),
        }
    }
}

/// Everything known about one scan: product, analysis and diet context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanHistoryRecord {
    pub product_name: String,
    pub brand: Option<String>,
    pub ingredients: Option<String>,
    pub nutrition: Nutrition,
    pub allergens: Vec<String>,
    pub labels: Vec<String>,
    pub nutri_score: Option<String>,
    pub nova_group: Option<u8>,
    pub product_source: Option<String>,
    pub analysis: DietaryAnalysis,
    pub dietary_restriction: RestrictionSummary,
    pub scan_timestamp: DateTime<Utc>,
    pub product_key: String,
}

pub fn format_scan_history_record(
    product: &Product,
    analysis: &DietaryAnalysis,
    profile: &RestrictionProfile,
) -> ScanHistoryRecord {
    ScanHistoryRecord {
        product_name: product.name.clone(),
        brand: product.brand.clone(),
        ingredients: product.ingredients_text(),
        nutrition: product.nutrition.clone(),
        allergens: product.allergens.clone(),
        labels: product.labels.clone(),
        nutri_score: product.nutri_score.clone(),
        nova_group: product.nova_group,
        product_source: product.source.map(|s| s.display_name().to_string()),
        analysis: analysis.clone(),
        dietary_restriction: RestrictionSummary::from(profile),
        scan_timestamp: generate_timestamp(),
        product_key: AnalysisKey::new(&product.name, &profile.id).to_string(),
    }
}

/// Row shape of the external history store. List fields are joined with `, `.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryRow {
    pub product_name: String,
    pub product_brand: Option<String>,
    pub product_ingredients: Option<String>,
    pub diet_id: String,
    pub diet_name: String,
    #[serde(deserialize_with = "bool_or_int")]
    pub is_compatible: bool,
    pub compatibility_score: u8,
    pub risk_level: RiskLevel,
    #[serde(default, deserialize_with = "string_or_null")]
    pub reasons: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub warnings: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub recommendations: String,
    pub product_source: Option<String>,
}

impl From<&ScanHistoryRecord> for HistoryRow {
    fn from(record: &ScanHistoryRecord) -> Self {
        Self {
            product_name: record.product_name.clone(),
            product_brand: record.brand.clone(),
            product_ingredients: record.ingredients.clone(),
            diet_id: record.dietary_restriction.id.clone(),
            diet_name: record.dietary_restriction.name.clone(),
            is_compatible: record.analysis.is_compatible,
            compatibility_score: record.analysis.compatibility_score,
            risk_level: record.analysis.risk_level,
            reasons: record.analysis.reasons.join(", "),
            warnings: record.analysis.warnings.join(", "),
            recommendations: record.analysis.recommendations.join(", "),
            product_source: record.product_source.clone(),
        }
    }
}

// The store keeps booleans as tinyint columns.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        dietary_analysis::fallback::fallback_analysis,
        product::value_objects::ProductProvider,
        restriction::get_profile,
    };

    fn scanned_milk() -> (Product, &'static RestrictionProfile) {
        let mut product = Product::new("Whole Milk", vec!["Milk".into(), "Vitamin D3".into()]);
        product.brand = Some("Farm Co".to_string());
        product.source = Some(ProductProvider::OpenFoodFacts);
        (product, get_profile("vegan").unwrap())
    }

    #[test]
    fn test_record_carries_diet_context() {
        let (product, vegan) = scanned_milk();
        let analysis = fallback_analysis(&product, vegan);

        let record = format_scan_history_record(&product, &analysis, vegan);
        assert_eq!(record.product_key, "Whole Milk_vegan");
        assert_eq!(record.ingredients.as_deref(), Some("Milk, Vitamin D3"));
        assert_eq!(record.dietary_restriction.name, "Vegan");
        assert_eq!(record.product_source.as_deref(), Some("OpenFoodFacts"));
        assert!(!record.analysis.is_compatible);
    }

    #[test]
    fn test_row_joins_lists() {
        let (product, vegan) = scanned_milk();
        let mut analysis = fallback_analysis(&product, vegan);
        analysis.warnings = vec!["Contains milk".into(), "Contains eggs".into()];

        let row = HistoryRow::from(&format_scan_history_record(&product, &analysis, vegan));
        assert_eq!(row.warnings, "Contains milk, Contains eggs");
        assert_eq!(row.diet_id, "vegan");
        assert_eq!(row.product_brand.as_deref(), Some("Farm Co"));
        assert_eq!(row.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_row_accepts_store_encoding() {
        let row: HistoryRow = serde_json::from_value(serde_json::json!({
            "product_name": "Bread",
            "product_brand": null,
            "product_ingredients": "Wheat flour, Water",
            "diet_id": "gluten-free",
            "diet_name": "Gluten-Free",
            "is_compatible": 0,
            "compatibility_score": 20,
            "risk_level": "high",
            "reasons": "Contains ingredients to avoid for your diet",
            "warnings": null,
            "recommendations": "Try rice cakes",
            "product_source": "OpenFoodFacts"
        }))
        .unwrap();

        assert!(!row.is_compatible);
        assert!(row.warnings.is_empty());
        assert!(row.product_brand.is_none());
    }
}
