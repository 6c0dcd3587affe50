use super::ReplyText;
use super::INVALID_RESPONSE_PLACEHOLDER;
use super::NO_MESSAGE_PLACEHOLDER;

#[test]
fn it_extracts_the_message() {
    let reply = ReplyText::parse(r#"{"message":"hello"}"#);
    assert_eq!(reply, ReplyText::Message("hello".to_string()));
    assert_eq!(reply.display(), "hello");
}

#[test]
fn it_ignores_other_fields() {
    let reply = ReplyText::parse(r#"{"status":"ok","message":"How are you feeling today?"}"#);
    assert_eq!(reply.display(), "How are you feeling today?");
}

#[test]
fn it_uses_a_placeholder_for_non_json_bodies() {
    let reply = ReplyText::parse("Internal Server Error");
    assert!(matches!(reply, ReplyText::Invalid(_)));
    assert_eq!(reply.display(), INVALID_RESPONSE_PLACEHOLDER);
}

#[test]
fn it_uses_a_placeholder_for_non_object_json() {
    let reply = ReplyText::parse(r#"["hello"]"#);
    assert_eq!(reply.display(), INVALID_RESPONSE_PLACEHOLDER);
}

#[test]
fn it_uses_a_placeholder_when_the_message_is_missing() {
    let reply = ReplyText::parse(r#"{"detail":"user not found"}"#);
    assert_eq!(reply, ReplyText::MissingMessage);
    assert_eq!(reply.display(), NO_MESSAGE_PLACEHOLDER);
}

#[test]
fn it_rejects_structured_messages() {
    assert_eq!(
        ReplyText::parse(r#"{"message":null}"#).display(),
        INVALID_RESPONSE_PLACEHOLDER
    );
    assert_eq!(
        ReplyText::parse(r#"{"message":{"text":"hi"}}"#).display(),
        INVALID_RESPONSE_PLACEHOLDER
    );
}

#[test]
fn it_stringifies_scalar_messages() {
    assert_eq!(ReplyText::parse(r#"{"message":42}"#).display(), "42");
    assert_eq!(ReplyText::parse(r#"{"message":true}"#).display(), "true");
}
