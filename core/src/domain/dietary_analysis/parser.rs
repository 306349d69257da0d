use serde::Deserialize;

use crate::domain::dietary_analysis::entities::{
    AnalysisSource, DietaryAnalysis, IngredientRisk, IngredientRiskLevel,
};

const INCOMPATIBLE_PHRASES: [&str; 3] = ["not compatible", "not suitable", "avoid"];
const WARNING_PHRASES: [&str; 3] = ["warning", "concern", "caution"];
const EXCERPT_CHARS: usize = 200;

/// The JSON object the model is asked to answer with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedReply {
    #[serde(alias = "is_compatible")]
    pub is_compatible: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl DelegatedReply {
    pub fn into_analysis(self) -> DietaryAnalysis {
        let reason = if self.is_compatible {
            "Product appears safe for your diet"
        } else {
            "Product contains concerning ingredients"
        };

        DietaryAnalysis::new(
            self.is_compatible,
            vec![reason.to_string()],
            non_blank(self.warnings),
            non_blank(self.recommendations),
            AnalysisSource::Delegated,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    Structured(DelegatedReply),
    /// No JSON object anywhere in the reply.
    Prose,
    /// A JSON object was started but could not be read.
    Malformed(String),
}

/// Reads an untrusted model reply.
pub fn parse_reply(text: &str) -> ParsedReply {
    match first_json_block(text) {
        JsonBlock::Absent => ParsedReply::Prose,
        JsonBlock::Unterminated => ParsedReply::Malformed("unterminated JSON object".to_string()),
        JsonBlock::Complete(block) => match serde_json::from_str::<DelegatedReply>(block) {
            Ok(reply) => ParsedReply::Structured(reply),
            Err(e) => ParsedReply::Malformed(e.to_string()),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonBlock<'a> {
    Complete(&'a str),
    Unterminated,
    Absent,
}

/// Locates the first top-level `{...}` object, honouring string literals and
/// escapes so braces inside values do not end the block early.
pub fn first_json_block(text: &str) -> JsonBlock<'_> {
    first_balanced_block(text, '{', '}')
}

/// Same as [`first_json_block`] for a top-level `[...]` array.
pub fn first_json_array(text: &str) -> JsonBlock<'_> {
    first_balanced_block(text, '[', ']')
}

fn first_balanced_block(text: &str, open: char, close: char) -> JsonBlock<'_> {
    let Some(start) = text.find(open) else {
        return JsonBlock::Absent;
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + c.len_utf8();
                    return JsonBlock::Complete(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    JsonBlock::Unterminated
}

/// One entry of the ingredient breakdown as the model writes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIngredientRisk {
    name: Option<String>,
    category: Option<String>,
    #[serde(alias = "risk_level")]
    risk_level: Option<String>,
    reason: Option<String>,
}

impl RawIngredientRisk {
    /// `None` unless every field is present, non-blank and the level is known.
    fn into_risk(self) -> Option<IngredientRisk> {
        let filled = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Some(IngredientRisk {
            name: filled(self.name)?,
            category: filled(self.category)?,
            risk_level: IngredientRiskLevel::parse(&self.risk_level?)?,
            reason: filled(self.reason)?,
        })
    }
}

/// Reads the ingredient breakdown out of a model reply. Incomplete entries
/// are dropped; a reply without a readable array is an error.
pub fn parse_ingredient_risks(text: &str) -> Result<Vec<IngredientRisk>, String> {
    let block = match first_json_array(text) {
        JsonBlock::Complete(block) => block,
        JsonBlock::Unterminated => return Err("unterminated JSON array".to_string()),
        JsonBlock::Absent => return Err("no JSON array in reply".to_string()),
    };

    let raw: Vec<RawIngredientRisk> = serde_json::from_str(block).map_err(|e| e.to_string())?;
    Ok(raw.into_iter().filter_map(RawIngredientRisk::into_risk).collect())
}

/// Keyword reading of a reply that carried no JSON at all.
pub fn heuristic_analysis(text: &str) -> DietaryAnalysis {
    let lowered = text.to_lowercase();
    let is_compatible = !INCOMPATIBLE_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase));
    let has_warnings = WARNING_PHRASES.iter().any(|phrase| lowered.contains(phrase));

    let warnings = if has_warnings {
        vec!["Please review the full analysis carefully".to_string()]
    } else {
        Vec::new()
    };

    DietaryAnalysis::new(
        is_compatible,
        vec![excerpt(text)],
        warnings,
        vec!["Consult with a nutritionist for personalized advice".to_string()],
        AnalysisSource::TextHeuristic,
    )
}

fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dietary_analysis::entities::RiskLevel;

    #[test]
    fn test_block_inside_prose() {
        let reply = "Sure! Here you go:\n{\"isCompatible\": false, \"warnings\": [\"Contains milk\"]}\nHope it helps {smile}";
        assert_eq!(
            first_json_block(reply),
            JsonBlock::Complete("{\"isCompatible\": false, \"warnings\": [\"Contains milk\"]}")
        );
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let reply = r#"{"isCompatible": true, "warnings": ["odd } brace", "quote \" {"]}"#;
        assert_eq!(first_json_block(reply), JsonBlock::Complete(reply));
    }

    #[test]
    fn test_nested_objects() {
        let reply = r#"{"a": {"b": 1}} trailing"#;
        assert_eq!(first_json_block(reply), JsonBlock::Complete(r#"{"a": {"b": 1}}"#));
    }

    #[test]
    fn test_absent_and_unterminated() {
        assert_eq!(first_json_block("no json here"), JsonBlock::Absent);
        assert_eq!(
            first_json_block(r#"{"isCompatible": true"#),
            JsonBlock::Unterminated
        );
    }

    #[test]
    fn test_array_with_nested_objects() {
        let reply = r#"Here: [{"name": "a]b", "tags": [1, 2]}, {"name": "c"}] done [x]"#;
        assert_eq!(
            first_json_array(reply),
            JsonBlock::Complete(r#"[{"name": "a]b", "tags": [1, 2]}, {"name": "c"}]"#)
        );
        assert_eq!(first_json_array("[1, 2"), JsonBlock::Unterminated);
    }

    #[test]
    fn test_ingredient_risks_drop_incomplete_entries() {
        let reply = r#"```json
[
  {"name": "Whey", "category": "Dairy protein", "riskLevel": "HIGH", "reason": "Milk derived"},
  {"name": "Natural flavor", "category": "Flavoring", "riskLevel": "medium", "reason": "Source unclear"},
  {"name": "Salt", "category": "Seasoning", "riskLevel": "low", "reason": " "},
  {"name": "Sugar", "category": "Sweetener", "riskLevel": "unknown", "reason": "?"},
  {"name": "Water", "riskLevel": "low", "reason": "Safe"}
]
```"#;

        let risks = parse_ingredient_risks(reply).unwrap();
        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].name, "Whey");
        assert_eq!(risks[0].risk_level, IngredientRiskLevel::High);
        assert_eq!(risks[1].risk_level, IngredientRiskLevel::Moderate);
    }

    #[test]
    fn test_ingredient_risks_unreadable_reply() {
        assert!(parse_ingredient_risks("All ingredients look fine.").is_err());
        assert!(parse_ingredient_risks(r#"[{"name": "Salt""#).is_err());
        assert!(parse_ingredient_risks(r#"[1, 2]"#).is_err());
        assert_eq!(parse_ingredient_risks("[]"), Ok(Vec::new()));
    }

    #[test]
    fn test_structured_reply_is_banded() {
        let ParsedReply::Structured(reply) = parse_reply(
            "```json\n{\"isCompatible\": true, \"warnings\": [\"High sugar\", \" \"], \"recommendations\": [\"Try Oatly\"]}\n```",
        ) else {
            panic!("expected structured reply");
        };

        let analysis = reply.into_analysis();
        assert!(analysis.is_compatible);
        assert_eq!(analysis.warnings, vec!["High sugar"]);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.compatibility_score, 70);
        assert_eq!(analysis.source, AnalysisSource::Delegated);
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        assert!(matches!(
            parse_reply(r#"{"isCompatible": "maybe"}"#),
            ParsedReply::Malformed(_)
        ));
        assert!(matches!(
            parse_reply(r#"{"warnings": []}"#),
            ParsedReply::Malformed(_)
        ));
        assert_eq!(parse_reply("Looks fine to me."), ParsedReply::Prose);
    }

    #[test]
    fn test_heuristic_incompatible() {
        let analysis =
            heuristic_analysis("This product is not suitable for a vegan diet. Avoid it.");
        assert!(!analysis.is_compatible);
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.compatibility_score, 20);
        assert_eq!(analysis.source, AnalysisSource::TextHeuristic);
    }

    #[test]
    fn test_heuristic_compatible_with_concern() {
        let analysis = heuristic_analysis("Compatible, but one concern about sugar.");
        assert!(analysis.is_compatible);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.warnings.len(), 1);
    }

    #[test]
    fn test_heuristic_excerpt_is_bounded() {
        let long = "fine ".repeat(100);
        let analysis = heuristic_analysis(&long);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.reasons[0].chars().count(), EXCERPT_CHARS + 3);
    }
}
