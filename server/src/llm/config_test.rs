use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_llm_env() {
    unsafe {
        for key in [
            "LLM_PROVIDER",
            "LLM_MODEL",
            "LLM_API_KEY_ENV",
            "LLM_MAX_TOKENS",
            "LLM_GEMINI_BASE_URL",
            "LLM_REQUEST_TIMEOUT_SECS",
            "LLM_CONNECT_TIMEOUT_SECS",
            "GEMINI_API_KEY",
            "ANTHROPIC_API_KEY",
            "TEST_KEY",
        ] {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn from_env_defaults_to_gemini() {
    unsafe {
        clear_llm_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Gemini);
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
    assert_eq!(cfg.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.api_key, "secret");

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_parses_anthropic_overrides() {
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_PROVIDER", "anthropic");
        std::env::set_var("LLM_API_KEY_ENV", "TEST_KEY");
        std::env::set_var("TEST_KEY", "sk-test");
        std::env::set_var("LLM_MAX_TOKENS", "256");
        std::env::set_var("LLM_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("LLM_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.api_key, "sk-test");
    assert_eq!(cfg.max_tokens, 256);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_trims_gemini_base_url() {
    unsafe {
        clear_llm_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
        std::env::set_var("LLM_GEMINI_BASE_URL", "https://example.test/v1beta/");
        std::env::set_var("LLM_MODEL", "gemini-2.5-pro");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.gemini_base_url, "https://example.test/v1beta");
    assert_eq!(cfg.model, "gemini-2.5-pro");

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_missing_key_names_default_var() {
    unsafe { clear_llm_env() };

    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GEMINI_API_KEY"));
}

#[test]
fn from_env_blank_key_counts_as_missing() {
    unsafe {
        clear_llm_env();
        std::env::set_var("GEMINI_API_KEY", "  ");
    }

    assert!(matches!(LlmConfig::from_env(), Err(LlmError::MissingApiKey { .. })));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_unknown_provider_errors() {
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_PROVIDER", "bad");
        std::env::set_var("GEMINI_API_KEY", "secret");
    }

    let err = LlmConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));

    unsafe { clear_llm_env() };
}

#[test]
fn parse_max_tokens_rejects_zero_and_garbage() {
    assert!(parse_max_tokens(Some("0")).is_err());
    assert!(parse_max_tokens(Some("lots")).is_err());
    assert_eq!(parse_max_tokens(Some(" 128 ")).unwrap(), 128);
    assert_eq!(parse_max_tokens(None).unwrap(), DEFAULT_LLM_MAX_TOKENS);
}
