//! LLM configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 512;
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    Gemini,
    Anthropic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub gemini_base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// All optional:
    /// - `LLM_PROVIDER`: `gemini` (default) or `anthropic`
    /// - `LLM_API_KEY_ENV`: names the env var containing the key; defaults to
    ///   `GEMINI_API_KEY` or `ANTHROPIC_API_KEY` by provider
    /// - `LLM_MODEL`: provider default when absent
    /// - `LLM_GEMINI_BASE_URL`: default Gemini API base URL
    /// - `LLM_MAX_TOKENS`: default 512
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 60
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Fails on an unknown provider, an unparsable `LLM_MAX_TOKENS`, or when
    /// the key variable is unset or empty.
    pub fn from_env() -> Result<Self, LlmError> {
        let provider = parse_provider(std::env::var("LLM_PROVIDER").ok().as_deref())?;

        let key_var = std::env::var("LLM_API_KEY_ENV").unwrap_or_else(|_| default_key_var(provider).to_string());
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey { var: key_var.clone() })?;

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| default_model(provider).to_string());
        let max_tokens = parse_max_tokens(std::env::var("LLM_MAX_TOKENS").ok().as_deref())?;
        let gemini_base_url = std::env::var("LLM_GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = LlmTimeouts {
            request_secs: env_parse_u64("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, api_key, model, max_tokens, gemini_base_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<LlmProviderKind, LlmError> {
    match raw.unwrap_or("gemini") {
        "gemini" => Ok(LlmProviderKind::Gemini),
        "anthropic" => Ok(LlmProviderKind::Anthropic),
        other => Err(LlmError::ConfigParse(format!("unknown LLM_PROVIDER: {other}"))),
    }
}

fn parse_max_tokens(raw: Option<&str>) -> Result<u32, LlmError> {
    match raw {
        None => Ok(DEFAULT_LLM_MAX_TOKENS),
        Some(v) => match v.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(LlmError::ConfigParse(format!("invalid LLM_MAX_TOKENS: {v}"))),
        },
    }
}

fn default_key_var(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => "GEMINI_API_KEY",
        LlmProviderKind::Anthropic => "ANTHROPIC_API_KEY",
    }
}

fn default_model(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => "gemini-2.5-flash",
        LlmProviderKind::Anthropic => "claude-sonnet-4-5-20250929",
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
