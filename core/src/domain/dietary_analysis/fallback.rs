use crate::domain::{
    dietary_analysis::entities::{
        AnalysisSource, ConcernSeverity, DietaryAnalysis, IngredientRisk, IngredientRiskLevel,
        NutrientConcern,
    },
    ingredient::{
        classifier::{classify, matched_avoid_terms},
        entities::FlagLevel,
    },
    product::entities::{Nutrient, Nutrition, Product},
    restriction::entities::{NutrientThresholds, RestrictionProfile},
    verdict::{entities::Verdict, services::analyze_product},
};

const CRITICAL_FACTOR: f64 = 1.5;
const MAX_ALTERNATIVES: usize = 3;

/// Offline analysis built on the ingredient classifier, the profile
/// thresholds and the avoided labels. Never fails.
pub fn fallback_analysis(product: &Product, profile: &RestrictionProfile) -> DietaryAnalysis {
    let verdict = analyze_product(product, profile);
    let is_compatible = verdict.product_verdict != Verdict::Avoid;

    let mut warnings: Vec<String> = matched_avoid_terms(&product.ingredients, profile)
        .into_iter()
        .map(|term| format!("Contains {term}"))
        .collect();

    warnings.extend(verdict.flags_at(FlagLevel::Caution).filter_map(|flag| {
        flag.reason
            .as_deref()
            .map(|reason| format!("{} {reason}", flag.ingredient))
    }));

    let concerns = profile
        .thresholds
        .as_ref()
        .map(|thresholds| nutrient_concerns(&product.nutrition, thresholds))
        .unwrap_or_default();
    warnings.extend(concerns.iter().map(NutrientConcern::describe));

    warnings.extend(
        avoided_labels(product, profile)
            .into_iter()
            .map(|label| format!("Labelled as {label}")),
    );

    let reasons = if !is_compatible {
        "Contains ingredients to avoid for your diet"
    } else if warnings.is_empty() {
        "No concerning ingredients found"
    } else {
        "No forbidden ingredients, but some details need a closer look"
    };

    let alternatives = if is_compatible {
        Vec::new()
    } else {
        profile
            .prefer_ingredients
            .iter()
            .take(MAX_ALTERNATIVES)
            .cloned()
            .collect()
    };

    DietaryAnalysis::new(
        is_compatible,
        vec![reasons.to_string()],
        warnings,
        recommendations(product, profile, is_compatible),
        AnalysisSource::RuleBased,
    )
    .with_alternatives(alternatives)
    .with_nutrient_concerns(concerns)
}

/// Threshold checks for every limit the profile declares and the product
/// reports. A ceiling exceeded by more than half is critical.
pub fn nutrient_concerns(
    nutrition: &Nutrition,
    thresholds: &NutrientThresholds,
) -> Vec<NutrientConcern> {
    let maxima = [
        (Nutrient::Calories, thresholds.max_calories),
        (Nutrient::Carbs, thresholds.max_carbs),
        (Nutrient::Sugars, thresholds.max_sugars),
        (Nutrient::Fat, thresholds.max_fat),
        (Nutrient::SaturatedFat, thresholds.max_saturated_fat),
        (Nutrient::Salt, thresholds.max_salt),
        (Nutrient::Sodium, thresholds.max_sodium),
    ];
    let minima = [
        (Nutrient::Protein, thresholds.min_protein),
        (Nutrient::Fiber, thresholds.min_fiber),
    ];

    let over = maxima.into_iter().filter_map(|(nutrient, limit)| {
        let limit = limit?;
        let value = nutrition.value(nutrient)?;
        (value > limit).then(|| NutrientConcern {
            nutrient,
            value,
            limit,
            severity: if value > limit * CRITICAL_FACTOR {
                ConcernSeverity::Critical
            } else {
                ConcernSeverity::Warning
            },
        })
    });

    let under = minima.into_iter().filter_map(|(nutrient, limit)| {
        let limit = limit?;
        let value = nutrition.value(nutrient)?;
        (value < limit).then_some(NutrientConcern {
            nutrient,
            value,
            limit,
            severity: ConcernSeverity::Low,
        })
    });

    over.chain(under).collect()
}

/// Per-ingredient breakdown from the classifier: avoid is high risk, caution
/// is moderate, everything else low. Blank entries are skipped.
pub fn basic_ingredient_risks<S: AsRef<str>>(
    ingredients: &[S],
    profile: &RestrictionProfile,
) -> Vec<IngredientRisk> {
    ingredients
        .iter()
        .map(|ingredient| ingredient.as_ref().trim())
        .filter(|ingredient| !ingredient.is_empty())
        .map(|ingredient| {
            let flag = classify(ingredient, profile);
            let reason = match (flag.flag, flag.reason.as_deref()) {
                (FlagLevel::Avoid, Some(reason)) => format!(
                    "May contain {}-restricted ingredients ({reason})",
                    profile.name
                ),
                (FlagLevel::Avoid, None) => {
                    format!("May contain {}-restricted ingredients", profile.name)
                }
                (FlagLevel::Caution, Some(reason)) => format!("Check the label: {reason}"),
                _ => "Appears safe".to_string(),
            };

            IngredientRisk {
                name: ingredient.to_string(),
                category: "Ingredient".to_string(),
                risk_level: IngredientRiskLevel::from(flag.flag),
                reason,
            }
        })
        .collect()
}

fn avoided_labels<'p>(product: &Product, profile: &'p RestrictionProfile) -> Vec<&'p str> {
    let labels: Vec<String> = product.labels.iter().map(|l| l.to_lowercase()).collect();
    profile
        .avoided_labels
        .iter()
        .map(String::as_str)
        .filter(|avoided| labels.iter().any(|label| label.contains(avoided)))
        .collect()
}

fn recommendations(
    product: &Product,
    profile: &RestrictionProfile,
    is_compatible: bool,
) -> Vec<String> {
    if is_compatible {
        return vec![
            format!("Try similar {}-friendly brands for variety", profile.name),
            format!("Look for organic or premium versions of {}", product.name),
        ];
    }

    let name = product.name.to_lowercase();
    let lines: [&str; 2] = if name.contains("milk") || name.contains("dairy") {
        [
            "Try plant-based alternatives like oat milk, almond milk, or coconut milk",
            "Consider dairy-free versions from brands like Oatly or Silk",
        ]
    } else if name.contains("bread") || name.contains("wheat") {
        [
            "Look for gluten-free bread alternatives like Ezekiel or Dave's Killer Bread gluten-free",
            "Try alternatives like rice cakes, corn tortillas, or lettuce wraps",
        ]
    } else if name.contains("cheese") {
        [
            "Try plant-based cheese alternatives like Violife or Daiya",
            "Consider nutritional yeast for a cheesy flavor without dairy",
        ]
    } else {
        return vec![
            format!(
                "Find {}-compliant alternatives to {}",
                profile.name, product.name
            ),
            "Check specialty stores for diet-specific versions of this product".to_string(),
        ];
    };

    lines.iter().map(|line| line.to_string()).collect()
}
