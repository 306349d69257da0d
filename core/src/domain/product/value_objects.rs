use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ingredient::classifier::split_ingredients,
    product::entities::{Nutrition, Product},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductProvider {
    OpenFoodFacts,
    Nutritionix,
    Usda,
}

impl ProductProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductProvider::OpenFoodFacts => "OpenFoodFacts",
            ProductProvider::Nutritionix => "Nutritionix",
            ProductProvider::Usda => "USDA FoodData Central",
        }
    }
}

/// Ingredients as callers send them: one statement or an already split list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IngredientsInput {
    Statement(String),
    List(Vec<String>),
}

impl Default for IngredientsInput {
    fn default() -> Self {
        IngredientsInput::List(Vec::new())
    }
}

impl IngredientsInput {
    pub fn into_list(self) -> Vec<String> {
        match self {
            IngredientsInput::Statement(statement) => split_ingredients(&statement),
            IngredientsInput::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

/// Product record as submitted by a client that already fetched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    #[serde(default)]
    pub ingredients: IngredientsInput,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub source: Option<ProductProvider>,
}

impl From<ProductInput> for Product {
    fn from(input: ProductInput) -> Self {
        Self {
            name: input.name,
            brand: input.brand,
            barcode: input.barcode,
            ingredients: input.ingredients.into_list(),
            nutrition: input.nutrition,
            allergens: input.allergens,
            labels: input.labels,
            nutri_score: None,
            nova_group: None,
            source: input.source,
        }
    }
}

/// Quick per-100g warnings shown next to a scanned product.
pub fn health_warnings(nutrition: &Nutrition) -> Vec<String> {
    let checks = [
        (nutrition.sugars, 15.0, "High Sugar"),
        (nutrition.fat, 20.0, "High Fat"),
        (nutrition.salt, 2.0, "High Salt"),
    ];

    checks
        .into_iter()
        .filter_map(|(value, limit, label)| match value {
            Some(v) if v > limit => Some(label.to_string()),
            _ => None,
        })
        .collect()
}
