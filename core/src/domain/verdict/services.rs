use crate::domain::{
    ingredient::{
        classifier::classify,
        entities::{FlagLevel, IngredientFlag},
    },
    product::entities::Product,
    restriction::entities::RestrictionProfile,
    verdict::entities::{ProductVerdict, Verdict},
};

const AVOID_FALLBACK_SUMMARY: &str = "Watch out! This has ingredients you need to avoid.";
const CAUTION_SUMMARY: &str = "This looks mostly okay, but check with a grown-up first!";
const GOOD_SUMMARY: &str = "Good choice! This looks safe for you to eat!";

pub fn analyze_product(product: &Product, profile: &RestrictionProfile) -> ProductVerdict {
    analyze_ingredients(&product.ingredients, profile)
}

/// Folds per-ingredient flags into one verdict. Blank entries are skipped.
pub fn analyze_ingredients<S: AsRef<str>>(
    ingredients: &[S],
    profile: &RestrictionProfile,
) -> ProductVerdict {
    let per_ingredient_flags: Vec<IngredientFlag> = ingredients
        .iter()
        .map(|ingredient| ingredient.as_ref())
        .filter(|ingredient| !ingredient.trim().is_empty())
        .map(|ingredient| classify(ingredient, profile))
        .collect();

    let product_verdict: Verdict = per_ingredient_flags
        .iter()
        .map(|flag| flag.flag)
        .max()
        .unwrap_or(FlagLevel::Safe)
        .into();

    let summary_line = summary_line(product_verdict, &per_ingredient_flags);

    ProductVerdict {
        product_verdict,
        summary_line,
        per_ingredient_flags,
    }
}

fn summary_line(verdict: Verdict, flags: &[IngredientFlag]) -> String {
    match verdict {
        Verdict::Avoid => flags
            .iter()
            .filter(|flag| flag.flag == FlagLevel::Avoid)
            .find_map(|flag| flag.reason.as_deref())
            .map(|reason| format!("Watch out! This one {reason}. It might upset your tummy!"))
            .unwrap_or_else(|| AVOID_FALLBACK_SUMMARY.to_string()),
        Verdict::Caution => CAUTION_SUMMARY.to_string(),
        Verdict::Good => GOOD_SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restriction::{DietToggles, get_profile, list_profiles};

    #[test]
    fn test_vegan_milk_scenario() {
        let vegan = get_profile("vegan").unwrap();
        let verdict = analyze_ingredients(&["Organic Whole Milk", "Vitamin D3"], vegan);

        assert_eq!(verdict.product_verdict, Verdict::Avoid);
        assert_eq!(verdict.per_ingredient_flags[0].flag, FlagLevel::Avoid);
        assert!(
            verdict.per_ingredient_flags[0]
                .reason
                .as_deref()
                .unwrap()
                .contains("milk")
        );
        assert_eq!(verdict.per_ingredient_flags[1].flag, FlagLevel::Safe);
        assert!(verdict.summary_line.contains("milk"));
    }

    #[test]
    fn test_gluten_free_scenario_is_good() {
        let gluten_free = get_profile("gluten-free").unwrap();
        let verdict =
            analyze_ingredients(&["Rice Flour", "Water", "Seeds", "Honey"], gluten_free);

        assert_eq!(verdict.product_verdict, Verdict::Good);
        assert!(
            verdict
                .per_ingredient_flags
                .iter()
                .all(|f| f.flag == FlagLevel::Safe)
        );
        assert_eq!(verdict.summary_line, GOOD_SUMMARY);
    }

    #[test]
    fn test_empty_ingredients_are_good() {
        let vegan = get_profile("vegan").unwrap();
        let verdict = analyze_ingredients::<&str>(&[], vegan);
        assert_eq!(verdict.product_verdict, Verdict::Good);
        assert!(verdict.per_ingredient_flags.is_empty());
    }

    #[test]
    fn test_all_false_toggles_always_good() {
        let profile = DietToggles::default().to_profile();
        let verdict = analyze_ingredients(
            &["Whole milk", "Wheat flour", "Chicken stock", "Peanuts", "Soy sauce"],
            &profile,
        );
        assert_eq!(verdict.product_verdict, Verdict::Good);
    }

    #[test]
    fn test_avoid_dominates_caution_and_safe() {
        let no_dairy = get_profile("no-dairy").unwrap();
        let verdict = analyze_ingredients(
            &["Water", "Natural flavors", "Spices", "Butter", "Salt"],
            no_dairy,
        );
        assert_eq!(verdict.product_verdict, Verdict::Avoid);
        assert_eq!(
            verdict.summary_line,
            "Watch out! This one contains dairy. It might upset your tummy!"
        );
    }

    #[test]
    fn test_caution_summary_ignores_reason() {
        let no_dairy = get_profile("no-dairy").unwrap();
        let verdict = analyze_ingredients(&["Water", "Artificial flavor"], no_dairy);
        assert_eq!(verdict.product_verdict, Verdict::Caution);
        assert_eq!(verdict.summary_line, CAUTION_SUMMARY);
    }

    #[test]
    fn test_deterministic() {
        let ingredients = ["Wheat flour", "Sugar", "Butter", "Natural flavor"];
        for profile in list_profiles() {
            let first = analyze_ingredients(&ingredients, profile);
            let second = analyze_ingredients(&ingredients, profile);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_adding_avoid_match_never_lowers_severity() {
        let base = ["Water", "Natural flavor"];
        for profile in list_profiles() {
            let before = analyze_ingredients(&base, profile).product_verdict;
            let Some(trigger) = profile.avoid_ingredients().next() else {
                continue;
            };
            let mut extended: Vec<String> = base.iter().map(|s| s.to_string()).collect();
            extended.push(format!("Organic {trigger}"));
            let after = analyze_ingredients(&extended, profile).product_verdict;
            assert!(after >= before, "profile {}", profile.id);
            assert_eq!(after, Verdict::Avoid);
        }
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let vegan = get_profile("vegan").unwrap();
        let verdict = analyze_ingredients(&["", "  ", "Water"], vegan);
        assert_eq!(verdict.per_ingredient_flags.len(), 1);
    }
}
