use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A set of substring triggers sharing one reason.
///
/// Labelled groups report `contains <category>`; unlabelled groups report the
/// trigger that actually matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvoidGroup {
    pub category: Option<String>,
    pub triggers: Vec<String>,
}

impl AvoidGroup {
    pub fn labelled(category: &str, triggers: &[&str]) -> Self {
        Self {
            category: Some(category.to_string()),
            triggers: lowercase_all(triggers),
        }
    }

    pub fn unlabelled(triggers: &[&str]) -> Self {
        Self {
            category: None,
            triggers: lowercase_all(triggers),
        }
    }

    /// First trigger contained in an already-lowercased ingredient.
    pub fn first_match(&self, lowered_ingredient: &str) -> Option<&str> {
        self.triggers
            .iter()
            .find(|trigger| lowered_ingredient.contains(trigger.as_str()))
            .map(String::as_str)
    }

    pub fn reason_for(&self, matched: &str) -> String {
        match &self.category {
            Some(category) => format!("contains {category}"),
            None => format!("contains {matched}"),
        }
    }
}

/// Numeric ceilings and floors. Units follow whatever the product record
/// carries; nothing is converted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientThresholds {
    pub max_calories: Option<f64>,
    pub max_carbs: Option<f64>,
    pub max_sugars: Option<f64>,
    pub max_fat: Option<f64>,
    pub max_saturated_fat: Option<f64>,
    pub max_salt: Option<f64>,
    pub max_sodium: Option<f64>,
    pub min_protein: Option<f64>,
    pub min_fiber: Option<f64>,
}

impl NutrientThresholds {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestrictionProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub avoid_groups: Vec<AvoidGroup>,
    pub prefer_ingredients: Vec<String>,
    pub thresholds: Option<NutrientThresholds>,
    pub allowed_labels: Vec<String>,
    pub avoided_labels: Vec<String>,
}

impl RestrictionProfile {
    /// Every avoid trigger of the profile, in declaration order.
    pub fn avoid_ingredients(&self) -> impl Iterator<Item = &str> {
        self.avoid_groups
            .iter()
            .flat_map(|group| group.triggers.iter().map(String::as_str))
    }

    /// True when no ingredient can ever be flagged `Avoid` by this profile.
    pub fn has_no_triggers(&self) -> bool {
        self.avoid_ingredients().next().is_none()
    }
}

fn lowercase_all(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
