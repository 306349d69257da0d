use crate::domain::{
    ingredient::entities::{FlagLevel, IngredientFlag},
    restriction::entities::RestrictionProfile,
};

const MAY_CONTAIN_ALLERGENS: &str = "may contain allergens";
const SHARED_FACILITY: &str = "processed in shared facility";

/// Markers that hide what an ingredient really is. Applied the same way by
/// every caller so the verdict and the dietary analysis agree.
const AMBIGUITY_MARKERS: [(&str, &str); 5] = [
    ("natural flavor", MAY_CONTAIN_ALLERGENS),
    ("artificial flavor", MAY_CONTAIN_ALLERGENS),
    ("spices", MAY_CONTAIN_ALLERGENS),
    ("processed", SHARED_FACILITY),
    ("manufactured", SHARED_FACILITY),
];

/// Splits a raw ingredient statement on commas and semicolons.
pub fn split_ingredients(statement: &str) -> Vec<String> {
    statement
        .split([',', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies one ingredient against a profile.
///
/// Each avoid group stops at its first matching trigger; reasons of every
/// matching group end up joined in the single `Avoid` flag.
pub fn classify(ingredient: &str, profile: &RestrictionProfile) -> IngredientFlag {
    let lowered = ingredient.trim().to_lowercase();
    if lowered.is_empty() {
        return IngredientFlag::safe(ingredient);
    }

    let avoid_reasons = unique(
        profile
            .avoid_groups
            .iter()
            .filter_map(|group| group.first_match(&lowered).map(|m| group.reason_for(m))),
    );
    if !avoid_reasons.is_empty() {
        return IngredientFlag::with_reasons(ingredient, FlagLevel::Avoid, &avoid_reasons);
    }

    let caution_reasons = unique(
        AMBIGUITY_MARKERS
            .iter()
            .filter(|(marker, _)| lowered.contains(marker))
            .map(|(_, reason)| reason.to_string()),
    );
    if !caution_reasons.is_empty() {
        return IngredientFlag::with_reasons(ingredient, FlagLevel::Caution, &caution_reasons);
    }

    IngredientFlag::safe(ingredient)
}

/// Every avoid trigger of the profile found in any of the ingredients, in
/// profile order and without duplicates.
pub fn matched_avoid_terms<'p, S: AsRef<str>>(
    ingredients: &[S],
    profile: &'p RestrictionProfile,
) -> Vec<&'p str> {
    let lowered: Vec<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.as_ref().to_lowercase())
        .collect();

    let mut found: Vec<&str> = Vec::new();
    for trigger in profile.avoid_ingredients() {
        if !found.contains(&trigger) && lowered.iter().any(|i| i.contains(trigger)) {
            found.push(trigger);
        }
    }
    found
}

fn unique(reasons: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for reason in reasons {
        if !out.contains(&reason) {
            out.push(reason);
        }
    }
    out
}
