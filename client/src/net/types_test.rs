use super::*;

#[test]
fn concierge_request_uses_message_field() {
    let body = ConciergeRequest { message: "안녕하세요".into() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "message": "안녕하세요" }));
}

#[test]
fn concierge_reply_parses_reply_field() {
    let reply: ConciergeReply = serde_json::from_str(r#"{"reply":"고요함이 기다립니다."}"#).unwrap();
    assert_eq!(reply.reply, "고요함이 기다립니다.");
}

#[test]
fn concierge_reply_missing_field_is_error() {
    assert!(serde_json::from_str::<ConciergeReply>(r#"{"text":"x"}"#).is_err());
}
