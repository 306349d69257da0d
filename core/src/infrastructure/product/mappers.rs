use serde_json::Value;

use crate::{
    domain::{
        ingredient::classifier::split_ingredients,
        product::{
            entities::{Nutrition, Product},
            value_objects::ProductProvider,
        },
    },
    infrastructure::product::field_lookup::{first_number, first_string, string_list},
};

const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Maps one provider payload onto the canonical product.
pub fn normalize(raw: &Value, provider: ProductProvider) -> Product {
    let mut product = match provider {
        ProductProvider::OpenFoodFacts => from_open_food_facts(raw),
        ProductProvider::Nutritionix => from_nutritionix(raw),
        ProductProvider::Usda => from_usda(raw),
    };
    product.source = Some(provider);
    product
}

fn base(raw: &Value, name: &[&str], brand: &[&str], ingredients: &[&str], barcode: &[&str]) -> Product {
    let mut product = Product::new(
        first_string(raw, name).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
        first_string(raw, ingredients)
            .map(|statement| split_ingredients(&statement))
            .unwrap_or_default(),
    );
    product.brand = first_string(raw, brand);
    product.barcode = first_string(raw, barcode);
    product
}

fn from_open_food_facts(raw: &Value) -> Product {
    let mut product = base(
        raw,
        &["/product_name", "/product_name_en", "/generic_name"],
        &["/brands"],
        &["/ingredients_text", "/ingredients_text_en"],
        &["/code"],
    );

    product.nutrition = Nutrition {
        // `energy` without the kcal suffix is reported in kJ.
        calories: first_number(
            raw,
            &[
                "/nutriments/energy-kcal_100g",
                "/nutriments/energy-kcal",
                "/nutriments/energy_kcal",
            ],
        ),
        carbs: first_number(
            raw,
            &["/nutriments/carbohydrates_100g", "/nutriments/carbohydrates"],
        ),
        sugars: first_number(raw, &["/nutriments/sugars_100g", "/nutriments/sugars"]),
        fat: first_number(raw, &["/nutriments/fat_100g", "/nutriments/fat"]),
        saturated_fat: first_number(
            raw,
            &[
                "/nutriments/saturated-fat_100g",
                "/nutriments/saturated-fat",
                "/nutriments/saturated_fat",
            ],
        ),
        protein: first_number(raw, &["/nutriments/proteins_100g", "/nutriments/proteins"]),
        fiber: first_number(raw, &["/nutriments/fiber_100g", "/nutriments/fiber"]),
        salt: first_number(raw, &["/nutriments/salt_100g", "/nutriments/salt"]),
        sodium: first_number(raw, &["/nutriments/sodium_100g", "/nutriments/sodium"]),
    };
    product.allergens = string_list(raw, "/allergens_tags");
    product.labels = string_list(raw, "/labels_tags");
    product.nutri_score = first_string(raw, &["/nutrition_grades", "/nutriscore_grade"]);
    product.nova_group = first_number(raw, &["/nova_group", "/nova_groups"])
        .filter(|group| (1.0..=4.0).contains(group))
        .map(|group| group as u8);
    product
}

fn from_nutritionix(raw: &Value) -> Product {
    let mut product = base(
        raw,
        &["/food_name", "/product_name"],
        &["/brand_name", "/brands"],
        &["/nf_ingredient_statement", "/ingredients_text"],
        &["/upc"],
    );

    product.nutrition = Nutrition {
        calories: first_number(raw, &["/nf_calories"]),
        carbs: first_number(raw, &["/nf_total_carbohydrate"]),
        sugars: first_number(raw, &["/nf_sugars"]),
        fat: first_number(raw, &["/nf_total_fat"]),
        saturated_fat: first_number(raw, &["/nf_saturated_fat"]),
        protein: first_number(raw, &["/nf_protein"]),
        fiber: first_number(raw, &["/nf_dietary_fiber"]),
        salt: None,
        sodium: first_number(raw, &["/nf_sodium"]),
    };
    product
}

fn from_usda(raw: &Value) -> Product {
    let mut product = base(
        raw,
        &["/description", "/lowercaseDescription"],
        &["/brandName", "/brandOwner"],
        &["/ingredients"],
        &["/gtinUpc"],
    );

    let nutrients = raw
        .get("foodNutrients")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let find = |names: &[&str]| usda_nutrient(nutrients, names);

    product.nutrition = Nutrition {
        calories: find(&["Energy"]),
        carbs: find(&["Carbohydrate, by difference"]),
        sugars: find(&["Total Sugars", "Sugars, total including NLEA"]),
        fat: find(&["Total lipid (fat)"]),
        saturated_fat: find(&["Fatty acids, total saturated"]),
        protein: find(&["Protein"]),
        fiber: find(&["Fiber, total dietary"]),
        salt: None,
        sodium: find(&["Sodium, Na"]),
    };
    product
}

/// Value of the first entry whose `nutrientName` starts with one of `names`.
/// Energy is reported twice (kcal and kJ); only kcal is kept.
fn usda_nutrient(nutrients: &[Value], names: &[&str]) -> Option<f64> {
    names.iter().find_map(|name| {
        nutrients
            .iter()
            .filter(|n| {
                n.get("nutrientName")
                    .and_then(Value::as_str)
                    .is_some_and(|nutrient| nutrient.starts_with(name))
            })
            .filter(|n| {
                n.get("unitName")
                    .and_then(Value::as_str)
                    .is_none_or(|unit| unit != "kJ")
            })
            .find_map(|n| first_number(n, &["/value"]))
    })
}
