use serde_json::json;

/// Response schema handed to the model for dietary analyses.
pub fn get_dietary_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "isCompatible": { "type": "boolean" },
            "warnings": {
                "type": "array",
                "items": { "type": "string" }
            },
            "recommendations": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["isCompatible", "warnings", "recommendations"]
    })
}

/// Response schema for the per-ingredient risk breakdown.
pub fn get_ingredient_risks_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "category": { "type": "string" },
                "riskLevel": {
                    "type": "string",
                    "enum": ["high", "moderate", "low"]
                },
                "reason": { "type": "string" }
            },
            "required": ["name", "category", "riskLevel", "reason"]
        }
    })
}
