use std::sync::LazyLock;

use crate::domain::restriction::{
    entities::{AvoidGroup, NutrientThresholds, RestrictionProfile},
    toggles::ToggleCategory,
};

static PROFILES: LazyLock<Vec<RestrictionProfile>> = LazyLock::new(build_profiles);

/// Looks up a profile by id. Unknown ids yield `None`.
pub fn get_profile(id: &str) -> Option<&'static RestrictionProfile> {
    PROFILES.iter().find(|profile| profile.id == id)
}

pub fn list_profiles() -> &'static [RestrictionProfile] {
    PROFILES.as_slice()
}

struct NamedDiet {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    thresholds: Option<NutrientThresholds>,
    avoid: &'static [&'static str],
    prefer: &'static [&'static str],
    allowed_labels: &'static [&'static str],
    avoided_labels: &'static [&'static str],
}

impl From<NamedDiet> for RestrictionProfile {
    fn from(diet: NamedDiet) -> Self {
        Self {
            id: diet.id.to_string(),
            name: diet.name.to_string(),
            description: diet.description.to_string(),
            avoid_groups: vec![AvoidGroup::unlabelled(diet.avoid)],
            prefer_ingredients: owned_strings(diet.prefer),
            thresholds: diet.thresholds,
            allowed_labels: owned_strings(diet.allowed_labels),
            avoided_labels: owned_strings(diet.avoided_labels),
        }
    }
}

fn toggle_profile(category: ToggleCategory) -> RestrictionProfile {
    let label = category.as_str();
    RestrictionProfile {
        id: format!("no-{label}"),
        name: format!("No {}", capitalize(label)),
        description: format!("Avoids anything containing {label}"),
        avoid_groups: vec![category.avoid_group()],
        prefer_ingredients: Vec::new(),
        thresholds: None,
        allowed_labels: Vec::new(),
        avoided_labels: Vec::new(),
    }
}

fn build_profiles() -> Vec<RestrictionProfile> {
    let named = [
        NamedDiet {
            id: "keto",
            name: "Ketogenic Diet",
            description: "High fat, very low carb diet for ketosis",
            thresholds: Some(NutrientThresholds {
                max_carbs: Some(20.0),
                max_sugars: Some(5.0),
                ..Default::default()
            }),
            avoid: &[
                "sugar",
                "corn syrup",
                "wheat",
                "rice",
                "potato",
                "oats",
                "barley",
                "quinoa",
                "bread",
                "pasta",
                "honey",
                "maple syrup",
                "fruit juice",
            ],
            prefer: &[
                "avocado",
                "coconut oil",
                "olive oil",
                "butter",
                "cheese",
                "eggs",
                "meat",
                "fish",
                "nuts",
                "seeds",
                "leafy greens",
            ],
            allowed_labels: &["low-carb", "sugar-free", "keto-friendly"],
            avoided_labels: &["high-carb", "sweetened"],
        },
        NamedDiet {
            id: "vegan",
            name: "Vegan",
            description: "Plant-based, no animal products",
            thresholds: None,
            avoid: &[
                "milk", "cheese", "butter", "eggs", "meat", "chicken", "beef", "pork", "fish",
                "seafood", "honey", "gelatin", "casein", "whey", "lactose", "albumin", "lard",
                "tallow", "carmine", "shellac",
            ],
            prefer: &[
                "vegetables",
                "fruits",
                "grains",
                "legumes",
                "nuts",
                "seeds",
                "tofu",
                "tempeh",
                "nutritional yeast",
                "plant milk",
            ],
            allowed_labels: &["vegan", "plant-based", "dairy-free"],
            avoided_labels: &["contains-milk", "contains-eggs", "non-vegan"],
        },
        NamedDiet {
            id: "vegetarian",
            name: "Vegetarian",
            description: "No meat or fish, dairy and eggs okay",
            thresholds: None,
            avoid: &[
                "meat",
                "chicken",
                "beef",
                "pork",
                "fish",
                "seafood",
                "gelatin",
                "lard",
                "tallow",
                "chicken broth",
                "beef broth",
                "anchovy",
            ],
            prefer: &[
                "vegetables",
                "fruits",
                "grains",
                "legumes",
                "dairy",
                "eggs",
                "nuts",
                "seeds",
                "cheese",
                "milk",
                "yogurt",
            ],
            allowed_labels: &["vegetarian", "lacto-vegetarian", "ovo-vegetarian"],
            avoided_labels: &["contains-meat", "contains-fish"],
        },
        NamedDiet {
            id: "gluten-free",
            name: "Gluten-Free",
            description: "No gluten-containing grains",
            thresholds: None,
            avoid: &[
                "wheat",
                "barley",
                "rye",
                "spelt",
                "kamut",
                "triticale",
                "gluten",
                "wheat flour",
                "barley malt",
                "brewer's yeast",
                "seitan",
            ],
            prefer: &[
                "rice",
                "corn",
                "quinoa",
                "amaranth",
                "buckwheat",
                "millet",
                "oats",
                "potatoes",
                "tapioca",
                "coconut flour",
                "almond flour",
            ],
            allowed_labels: &["gluten-free", "certified gluten-free"],
            avoided_labels: &["contains-gluten", "may contain wheat"],
        },
        NamedDiet {
            id: "low-sodium",
            name: "Low Sodium",
            description: "Restricted sodium for heart health",
            thresholds: Some(NutrientThresholds {
                max_sodium: Some(140.0),
                max_salt: Some(0.35),
                ..Default::default()
            }),
            avoid: &[
                "salt",
                "sodium chloride",
                "monosodium glutamate",
                "sodium bicarbonate",
                "sodium nitrate",
                "sodium benzoate",
                "soy sauce",
                "fish sauce",
            ],
            prefer: &[
                "herbs",
                "spices",
                "lemon",
                "garlic",
                "onion",
                "fresh vegetables",
                "unsalted nuts",
                "low-sodium alternatives",
            ],
            allowed_labels: &["low-sodium", "no salt added", "reduced sodium"],
            avoided_labels: &["high-sodium", "salted"],
        },
        NamedDiet {
            id: "diabetic",
            name: "Diabetic-Friendly",
            description: "Low sugar, controlled carbs for blood sugar management",
            thresholds: Some(NutrientThresholds {
                max_sugars: Some(10.0),
                max_carbs: Some(45.0),
                ..Default::default()
            }),
            avoid: &[
                "sugar",
                "high fructose corn syrup",
                "corn syrup",
                "dextrose",
                "sucrose",
                "maltose",
                "honey",
                "maple syrup",
                "agave",
            ],
            prefer: &[
                "whole grains",
                "vegetables",
                "lean protein",
                "nuts",
                "seeds",
                "stevia",
                "monk fruit",
                "erythritol",
                "fiber-rich foods",
            ],
            allowed_labels: &["sugar-free", "no added sugar", "diabetic-friendly"],
            avoided_labels: &["high-sugar", "sweetened"],
        },
        NamedDiet {
            id: "paleo",
            name: "Paleo Diet",
            description: "Whole foods, no processed foods or grains",
            thresholds: None,
            avoid: &[
                "grains",
                "wheat",
                "rice",
                "corn",
                "oats",
                "legumes",
                "beans",
                "peanuts",
                "soy",
                "dairy",
                "sugar",
                "artificial sweeteners",
                "processed oils",
                "preservatives",
            ],
            prefer: &[
                "meat",
                "fish",
                "eggs",
                "vegetables",
                "fruits",
                "nuts",
                "seeds",
                "olive oil",
                "coconut oil",
                "avocado",
                "herbs",
                "spices",
            ],
            allowed_labels: &["paleo", "whole30", "grain-free"],
            avoided_labels: &["processed", "contains-grains"],
        },
    ];

    named
        .into_iter()
        .map(RestrictionProfile::from)
        .chain(ToggleCategory::ALL.into_iter().map(toggle_profile))
        .collect()
}

fn owned_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_profile_ids_are_unique() {
        let ids: HashSet<&str> = list_profiles().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), list_profiles().len());
    }

    #[test]
    fn test_registry_contains_named_diets_and_toggles() {
        for id in [
            "keto",
            "vegan",
            "vegetarian",
            "gluten-free",
            "low-sodium",
            "diabetic",
            "paleo",
            "no-dairy",
            "no-gluten",
            "no-meat",
            "no-nuts",
            "no-soy",
        ] {
            assert!(get_profile(id).is_some(), "missing profile {id}");
        }
    }

    #[test]
    fn test_unknown_profile_is_none() {
        assert!(get_profile("carnivore").is_none());
        assert!(get_profile("").is_none());
    }

    #[test]
    fn test_triggers_are_lowercase() {
        for profile in list_profiles() {
            for trigger in profile.avoid_ingredients() {
                assert_eq!(trigger, trigger.to_lowercase(), "profile {}", profile.id);
            }
        }
    }

    #[test]
    fn test_thresholds_only_on_numeric_diets() {
        let keto = get_profile("keto").unwrap();
        assert_eq!(keto.thresholds.as_ref().unwrap().max_carbs, Some(20.0));
        assert!(get_profile("vegan").unwrap().thresholds.is_none());
    }

    #[test]
    fn test_toggle_profiles_are_labelled() {
        let profile = get_profile("no-soy").unwrap();
        assert_eq!(profile.name, "No Soy");
        assert_eq!(profile.avoid_groups[0].category.as_deref(), Some("soy"));
    }
}
