use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, dietary_analysis::ports::LLMClient};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    fn request(prompt: String, response_schema: Option<serde_json::Value>) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: response_schema.map(|response_schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_text(gemini_response)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

/// Concatenated text parts of the first candidate.
fn first_text(response: GeminiResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    (!text.is_empty()).then_some(text)
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        tracing::debug!(model = %self.model_name, prompt_len = prompt.len(), "calling Gemini");
        self.call_gemini_api(Self::request(prompt, response_schema))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_without_schema_is_plain_text() {
        let request = GeminiLLMClient::request("Explain keto".to_string(), None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "Explain keto" }] }] })
        );
    }

    #[test]
    fn test_request_with_schema_asks_for_json() {
        let request = GeminiLLMClient::request("Check".to_string(), Some(json!({ "type": "object" })));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["generation_config"]["response_mime_type"],
            "application/json"
        );
    }

    #[test]
    fn test_first_text_joins_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"isCompatible\":" }, { "text": " true}" }] } }]
        }))
        .unwrap();
        assert_eq!(first_text(response).as_deref(), Some("{\"isCompatible\": true}"));
    }

    #[test]
    fn test_no_candidates() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(first_text(response).is_none());
    }
}
