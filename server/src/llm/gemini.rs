//! Google Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent`. The system
//! instruction travels in `systemInstruction`, the conversation in
//! `contents`. Pure parsing in `parse_response` for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let body = build_request(max_tokens, system, messages);

        let response = self
            .http
            .post(endpoint(&self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text, model)
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<PartOut<'a>>,
}

#[derive(Serialize)]
struct PartOut<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    thinking_config: ThinkingConfig,
}

/// 2.5 models bill thoughts against `maxOutputTokens`; a zero budget keeps
/// the whole cap for the visible answer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartIn>,
}

#[derive(Deserialize)]
struct PartIn {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

// =============================================================================
// REQUEST BUILDING
// =============================================================================

fn build_request<'a>(max_tokens: u32, system: &'a str, messages: &'a [Message]) -> GenerateContentRequest<'a> {
    let system_instruction =
        (!system.is_empty()).then(|| Content { role: None, parts: vec![PartOut { text: system }] });
    let contents = messages
        .iter()
        .map(|m| Content { role: Some("user"), parts: vec![PartOut { text: &m.text }] })
        .collect();
    GenerateContentRequest {
        system_instruction,
        contents,
        generation_config: GenerationConfig {
            max_output_tokens: max_tokens,
            thinking_config: ThinkingConfig { thinking_budget: 0 },
        },
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Collect the visible text of the first candidate. A response without
/// candidates (for example when the prompt was blocked) yields empty text.
fn parse_response(json: &str, requested_model: &str) -> Result<ChatResponse, LlmError> {
    let api: GenerateContentResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = api
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let (input_tokens, output_tokens) = api
        .usage_metadata
        .map_or((0, 0), |u| (u.prompt_token_count, u.candidates_token_count));

    Ok(ChatResponse {
        text,
        model: api.model_version.unwrap_or_else(|| requested_model.to_string()),
        input_tokens,
        output_tokens,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
