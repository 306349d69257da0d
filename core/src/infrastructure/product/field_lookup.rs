use serde_json::Value;

/// First path (JSON pointer) that resolves to a non-null, non-empty value.
pub fn first_present<'a>(raw: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| raw.pointer(path))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
}

pub fn first_string(raw: &Value, paths: &[&str]) -> Option<String> {
    first_present(raw, paths).and_then(|value| match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Numbers may arrive as JSON numbers or numeric strings.
pub fn first_number(raw: &Value, paths: &[&str]) -> Option<f64> {
    paths
        .iter()
        .filter_map(|path| raw.pointer(path))
        .find_map(as_number)
}

pub fn string_list(raw: &Value, path: &str) -> Vec<String> {
    raw.pointer(path)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_first_present_skips_missing_and_blank() {
        let raw = json!({ "product_name": "", "food_name": "Oat Drink", "description": "ignored" });
        assert_eq!(
            first_string(&raw, &["/product_name", "/food_name", "/description"]).as_deref(),
            Some("Oat Drink")
        );
        assert!(first_string(&raw, &["/brand"]).is_none());
    }

    #[test]
    fn test_numbers_from_strings() {
        let raw = json!({ "nutriments": { "sugars_100g": "4.8", "fat_100g": null, "fat": 1.5 } });
        assert_eq!(first_number(&raw, &["/nutriments/sugars_100g"]), Some(4.8));
        assert_eq!(
            first_number(&raw, &["/nutriments/fat_100g", "/nutriments/fat"]),
            Some(1.5)
        );
    }

    #[test]
    fn test_string_list() {
        let raw = json!({ "labels_tags": ["en:vegan", 3, "en:organic"] });
        assert_eq!(string_list(&raw, "/labels_tags"), vec!["en:vegan", "en:organic"]);
        assert!(string_list(&raw, "/allergens_tags").is_empty());
    }
}
