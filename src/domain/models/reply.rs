#[cfg(test)]
#[path = "reply_test.rs"]
mod tests;

use serde_json::Value;

pub const NO_MESSAGE_PLACEHOLDER: &str = "⚠️ No message found";
pub const INVALID_RESPONSE_PLACEHOLDER: &str = "⚠️ Invalid response";

/// Display text carried by the body of a `/start` or `/message` response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyText {
    Message(String),
    /// Valid JSON object without a `message` field.
    MissingMessage,
    /// Anything that isn't a JSON object with a scalar `message`.
    Invalid(String),
}

impl ReplyText {
    pub fn parse(body: &str) -> ReplyText {
        let value = match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(err) => return ReplyText::Invalid(err.to_string()),
        };

        let object = match value.as_object() {
            Some(object) => object,
            None => return ReplyText::Invalid("response is not a JSON object".to_string()),
        };

        match object.get("message") {
            None => return ReplyText::MissingMessage,
            Some(Value::String(text)) => return ReplyText::Message(text.to_string()),
            Some(Value::Number(number)) => return ReplyText::Message(number.to_string()),
            Some(Value::Bool(flag)) => return ReplyText::Message(flag.to_string()),
            Some(other) => {
                return ReplyText::Invalid(format!("message field is not text: {other}"));
            }
        }
    }

    /// Text shown in the chat, with placeholders for unusable bodies.
    pub fn display(&self) -> String {
        match self {
            ReplyText::Message(text) => return text.to_string(),
            ReplyText::MissingMessage => return NO_MESSAGE_PLACEHOLDER.to_string(),
            ReplyText::Invalid(_) => return INVALID_RESPONSE_PLACEHOLDER.to_string(),
        }
    }
}
