use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Hello world" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Hello world");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_thinking_blocks_are_dropped() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "Here is my answer" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Here is my answer");
}

#[test]
fn parse_thinking_only_response_is_empty() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." }
    ]));
    assert_eq!(parse_response(&json).unwrap().text, "");
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_response("not json"), Err(LlmError::ApiParse(_))));
}

#[test]
fn request_uses_plain_string_content() {
    let messages = [Message::user("안녕")];
    let body = serde_json::to_value(build_request("claude-x", 128, "persona", &messages)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "model": "claude-x",
            "max_tokens": 128,
            "system": "persona",
            "messages": [{ "role": "user", "content": "안녕" }]
        })
    );
}

#[test]
fn request_omits_empty_system() {
    let body = serde_json::to_value(build_request("claude-x", 128, "", &[])).unwrap();
    assert!(body.get("system").is_none());
}
