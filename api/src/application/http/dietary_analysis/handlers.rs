pub mod analyze_dietary_compatibility;
pub mod analyze_ingredient_risks;
