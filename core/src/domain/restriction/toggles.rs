use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::restriction::entities::{AvoidGroup, RestrictionProfile};

pub const TOGGLE_PROFILE_ID: &str = "custom-toggles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToggleCategory {
    Dairy,
    Gluten,
    Meat,
    Nuts,
    Soy,
}

impl ToggleCategory {
    pub const ALL: [ToggleCategory; 5] = [
        ToggleCategory::Dairy,
        ToggleCategory::Gluten,
        ToggleCategory::Meat,
        ToggleCategory::Nuts,
        ToggleCategory::Soy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleCategory::Dairy => "dairy",
            ToggleCategory::Gluten => "gluten",
            ToggleCategory::Meat => "meat",
            ToggleCategory::Nuts => "nuts",
            ToggleCategory::Soy => "soy",
        }
    }

    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            ToggleCategory::Dairy => &[
                "milk",
                "dairy",
                "cheese",
                "butter",
                "cream",
                "yogurt",
                "whey",
                "casein",
                "lactose",
                "milk solids",
                "ghee",
                "buttermilk",
            ],
            ToggleCategory::Gluten => &[
                "wheat", "barley", "rye", "malt", "spelt", "flour", "bread", "pasta", "cereal",
                "oats", "bulgur", "couscous", "semolina",
            ],
            ToggleCategory::Meat => &[
                "chicken",
                "beef",
                "pork",
                "turkey",
                "lamb",
                "fish",
                "seafood",
                "gelatin",
                "chicken stock",
                "beef broth",
                "pork fat",
                "lard",
                "bacon",
            ],
            ToggleCategory::Nuts => &[
                "almond",
                "walnut",
                "pecan",
                "cashew",
                "hazelnut",
                "pistachio",
                "macadamia",
                "peanut",
                "peanut oil",
                "almond oil",
                "walnut oil",
            ],
            ToggleCategory::Soy => &[
                "soy",
                "soybean",
                "soy lecithin",
                "soy protein",
                "soy sauce",
                "tofu",
                "tempeh",
                "miso",
                "soy oil",
                "soy flour",
            ],
        }
    }

    pub fn avoid_group(&self) -> AvoidGroup {
        AvoidGroup::labelled(self.as_str(), self.synonyms())
    }
}

/// The simple on/off restrictions picked in the settings screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietToggles {
    #[serde(default)]
    pub no_dairy: bool,
    #[serde(default)]
    pub no_gluten: bool,
    #[serde(default)]
    pub no_meat: bool,
    #[serde(default)]
    pub no_nuts: bool,
    #[serde(default)]
    pub no_soy: bool,
}

impl DietToggles {
    pub fn is_active(&self, category: ToggleCategory) -> bool {
        match category {
            ToggleCategory::Dairy => self.no_dairy,
            ToggleCategory::Gluten => self.no_gluten,
            ToggleCategory::Meat => self.no_meat,
            ToggleCategory::Nuts => self.no_nuts,
            ToggleCategory::Soy => self.no_soy,
        }
    }

    pub fn active_categories(&self) -> Vec<ToggleCategory> {
        ToggleCategory::ALL
            .into_iter()
            .filter(|category| self.is_active(*category))
            .collect()
    }

    /// Builds an ad-hoc profile with one labelled group per active toggle.
    pub fn to_profile(&self) -> RestrictionProfile {
        let active = self.active_categories();
        let description = if active.is_empty() {
            "No ingredient restrictions".to_string()
        } else {
            let names: Vec<&str> = active.iter().map(ToggleCategory::as_str).collect();
            format!("Avoids {}", names.join(", "))
        };

        RestrictionProfile {
            id: TOGGLE_PROFILE_ID.to_string(),
            name: "My Restrictions".to_string(),
            description,
            avoid_groups: active.iter().map(ToggleCategory::avoid_group).collect(),
            prefer_ingredients: Vec::new(),
            thresholds: None,
            allowed_labels: Vec::new(),
            avoided_labels: Vec::new(),
        }
    }
}
