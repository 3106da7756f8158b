//! Gemini completion client
//!
//! Relays a single user-role prompt to the generative-language endpoint
//! and normalizes the response into a [`CompletionResult`]. All transport
//! and shape failures collapse to [`CompletionResult::Failed`] after
//! logging; handler code never sees an error from this client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::ServiceConfig;

const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini client errors (internal; collapsed at the public boundary)
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Unexpected response structure: no candidate text")]
    MissingContent,

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Outcome of a completion call
#[derive(Debug, Clone)]
pub enum CompletionResult {
    /// Trimmed plain-text completion (no response schema was requested)
    Text(String),
    /// Parsed JSON conforming to the requested response schema
    Structured(Value),
    /// Upstream failure; the calling handler applies its documented fallback
    Failed,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, GeminiError> {
        let http_client = reqwest::Client::builder()
            .timeout(COMPLETION_TIMEOUT)
            .build()
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.gemini_endpoint.clone(),
            api_key: config.google_api_key.clone(),
        })
    }

    /// Send `prompt` as a single user-role message.
    ///
    /// With `response_schema`, the service is instructed to answer with
    /// JSON conforming to the schema; code fences are stripped from the
    /// reply before parsing. Without a schema the trimmed raw text is
    /// returned.
    pub async fn complete(&self, prompt: &str, response_schema: Option<Value>) -> CompletionResult {
        match self.complete_inner(prompt, response_schema).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "Gemini completion failed");
                CompletionResult::Failed
            }
        }
    }

    async fn complete_inner(
        &self,
        prompt: &str,
        response_schema: Option<Value>,
    ) -> Result<CompletionResult, GeminiError> {
        let structured = response_schema.is_some();

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api(status.as_u16(), error_text));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(GeminiError::MissingContent)?;

        if structured {
            let clean = strip_code_fences(&text);
            let value: Value =
                serde_json::from_str(clean).map_err(|e| GeminiError::Parse(e.to_string()))?;
            Ok(CompletionResult::Structured(value))
        } else {
            Ok(CompletionResult::Text(text.trim().to_string()))
        }
    }
}

/// Strip leading/trailing markdown code-fence markers from a completion.
///
/// Gemini wraps JSON answers in ```` ```json ```` fences even when asked
/// for a JSON MIME type; a fenced payload must parse identically to the
/// bare payload.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") up to the end of the opening line
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    match rest.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fence() {
        let fenced = "```json\n[{\"topic\":\"Graphs\"}]\n```";
        assert_eq!(strip_code_fences(fenced), "[{\"topic\":\"Graphs\"}]");
    }

    #[test]
    fn test_strip_bare_fence() {
        let fenced = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\":1}");
    }

    #[test]
    fn test_unfenced_passthrough() {
        assert_eq!(strip_code_fences("  [1, 2, 3]  "), "[1, 2, 3]");
    }

    #[test]
    fn test_fenced_parses_identically_to_bare() {
        let bare = "[{\"front\":\"Q\",\"back\":\"A\"}]";
        let fenced = format!("```json\n{bare}\n```");

        let from_bare: Value = serde_json::from_str(strip_code_fences(bare)).unwrap();
        let from_fenced: Value = serde_json::from_str(strip_code_fences(&fenced)).unwrap();
        assert_eq!(from_bare, from_fenced);
        assert_eq!(from_bare, json!([{"front": "Q", "back": "A"}]));
    }

    #[test]
    fn test_request_serializes_camel_case_config() {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: json!({"type": "ARRAY"}),
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn test_plain_request_omits_generation_config() {
        let request = GenerateContentRequest {
            contents: vec![],
            generation_config: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
    }
}
