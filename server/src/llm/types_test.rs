use super::*;

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn transport_failure_is_retryable() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
}

#[test]
fn rate_limit_and_server_errors_are_retryable() {
    for status in [429, 500, 503] {
        let err = LlmError::ApiResponse { status, body: String::new() };
        assert!(err.retryable(), "status {status}");
    }
}

#[test]
fn client_errors_are_not_retryable() {
    for status in [400, 401, 403] {
        let err = LlmError::ApiResponse { status, body: String::new() };
        assert!(!err.retryable(), "status {status}");
    }
}

#[test]
fn config_errors_are_not_retryable() {
    assert!(!LlmError::ConfigParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::HttpClientBuild("tls".into()).retryable());
}

#[test]
fn missing_key_message_names_variable() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GEMINI_API_KEY not set");
}

#[test]
fn response_error_message_shows_status_only() {
    let err = LlmError::ApiResponse { status: 502, body: "upstream said no".into() };
    assert_eq!(err.to_string(), "API response error: status 502");
}

// =============================================================================
// Message
// =============================================================================

#[test]
fn user_message_keeps_text_untouched() {
    let msg = Message::user("  조용한 방이 있나요?  ");
    assert_eq!(msg.text, "  조용한 방이 있나요?  ");
}
