use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::value_objects::ProductProvider;

/// Nutrition facts as reported by the provider. Every field is optional and
/// units are whatever the provider uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: Option<f64>,
    pub carbs: Option<f64>,
    pub sugars: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub protein: Option<f64>,
    pub fiber: Option<f64>,
    pub salt: Option<f64>,
    pub sodium: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Carbs,
    Sugars,
    Fat,
    SaturatedFat,
    Protein,
    Fiber,
    Salt,
    Sodium,
}

impl Nutrient {
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Carbs => "carbs",
            Nutrient::Sugars => "sugars",
            Nutrient::Fat => "fat",
            Nutrient::SaturatedFat => "saturated fat",
            Nutrient::Protein => "protein",
            Nutrient::Fiber => "fiber",
            Nutrient::Salt => "salt",
            Nutrient::Sodium => "sodium",
        }
    }
}

impl Nutrition {
    pub fn value(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Carbs => self.carbs,
            Nutrient::Sugars => self.sugars,
            Nutrient::Fat => self.fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Protein => self.protein,
            Nutrient::Fiber => self.fiber,
            Nutrient::Salt => self.salt,
            Nutrient::Sodium => self.sodium,
        }
    }
}

/// Canonical product shape. Provider payloads are mapped onto it before any
/// evaluation happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub nutri_score: Option<String>,
    pub nova_group: Option<u8>,
    pub source: Option<ProductProvider>,
}

impl Product {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            brand: None,
            barcode: None,
            ingredients,
            nutrition: Nutrition::default(),
            allergens: Vec::new(),
            labels: Vec::new(),
            nutri_score: None,
            nova_group: None,
            source: None,
        }
    }

    /// Ingredients re-joined into one statement, `None` when there are none.
    pub fn ingredients_text(&self) -> Option<String> {
        if self.ingredients.is_empty() {
            None
        } else {
            Some(self.ingredients.join(", "))
        }
    }
}
