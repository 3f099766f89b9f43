use super::*;

#[test]
fn request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest { message: "Hi".into() }).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Hi" }));
}

#[test]
fn request_keeps_surrounding_whitespace() {
    let body = serde_json::to_string(&ChatRequest { message: "  Hi  ".into() }).unwrap();
    assert_eq!(body, r#"{"message":"  Hi  "}"#);
}

#[test]
fn reply_deserializes_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"reply":"Hello!"}"#).unwrap();
    assert_eq!(reply, ChatReply::text("Hello!"));
}

#[test]
fn reply_missing_field_is_none() {
    let reply: ChatReply = serde_json::from_str(r#"{"answer":"Hello!"}"#).unwrap();
    assert_eq!(reply.reply, None);
}

#[test]
fn reply_null_field_is_none() {
    let reply: ChatReply = serde_json::from_str(r#"{"reply":null}"#).unwrap();
    assert_eq!(reply.reply, None);
}

#[test]
fn reply_non_string_field_is_an_error() {
    assert!(serde_json::from_str::<ChatReply>(r#"{"reply":42}"#).is_err());
}
