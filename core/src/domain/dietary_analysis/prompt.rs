use crate::domain::{product::entities::Product, restriction::entities::RestrictionProfile};

pub fn analysis_prompt(product: &Product, profile: &RestrictionProfile) -> String {
    let ingredients = product
        .ingredients_text()
        .unwrap_or_else(|| "Not specified".to_string());
    let avoid = profile.avoid_ingredients().collect::<Vec<_>>().join(", ");
    let diet = &profile.name;

    format!(
        r#"Check if "{name}" is safe for {diet} diet.

Ingredients: {ingredients}
Avoid: {avoid}

For recommendations, suggest specific product alternatives based on compatibility:
- If COMPATIBLE: Suggest 2 similar products that are also good for {diet} diet
- If SOMEWHAT COMPATIBLE: Suggest 2 better alternatives with higher compatibility
- If NOT COMPATIBLE: Suggest 2 alternative products they can use instead of this item

JSON response:
{{
  "isCompatible": true/false,
  "warnings": ["ingredient concerns"],
  "recommendations": ["Specific product alternatives or suggestions, not generic advice"]
}}"#,
        name = product.name,
    )
}

pub fn explanation_prompt(profile: &RestrictionProfile) -> String {
    format!(
        "Explain {} diet to a child in 2 simple sentences. What to avoid and why.",
        profile.name
    )
}

pub fn ingredient_risk_prompt(ingredients: &[String], profile: &RestrictionProfile) -> String {
    let avoid = profile.avoid_ingredients().collect::<Vec<_>>().join(", ");
    let diet = &profile.name;

    format!(
        r#"Analyze these ingredients for {diet} diet compatibility:

INGREDIENTS: {ingredients}

DIETARY RESTRICTIONS:
- Avoid: {avoid}
- Diet: {diet}
- Description: {description}

For each ingredient, categorize into:
- HIGH RISK: Definitely harmful/forbidden for this diet
- MODERATE RISK: Potentially concerning or should limit
- LOW RISK: Safe and compatible

Also identify the ingredient type (e.g., "Preservative", "Food coloring", "Natural flavor", "Sugar substitute", etc.)

Return ONLY a JSON array in this exact format:
[
  {{
    "name": "ingredient name",
    "category": "ingredient type/category",
    "riskLevel": "high|moderate|low",
    "reason": "brief explanation why"
  }}
]"#,
        ingredients = ingredients.join(", "),
        description = profile.description,
    )
}
