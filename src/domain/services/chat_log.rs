#[cfg(test)]
#[path = "chat_log_test.rs"]
mod tests;

use crate::domain::models::Message;

/// Append only list of chat messages. Entries are never removed or
/// reordered; only the text of an existing entry can be replaced.
#[derive(Default)]
pub struct ChatLog {
    messages: Vec<Message>,
    revision: u64,
}

impl ChatLog {
    pub fn new(messages: Vec<Message>) -> ChatLog {
        return ChatLog {
            messages,
            revision: 0,
        };
    }

    /// Returns the index of the appended message.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.revision += 1;
        return self.messages.len() - 1;
    }

    /// Replaces the text at `index`. Out of range indexes are ignored.
    pub fn replace(&mut self, index: usize, text: &str) -> bool {
        if let Some(message) = self.messages.get_mut(index) {
            message.set_text(text);
            self.revision += 1;
            return true;
        }

        return false;
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    /// Incremented on every mutation.
    pub fn revision(&self) -> u64 {
        return self.revision;
    }
}

#[cfg(test)]
impl ChatLog {
    pub fn get(&self, index: usize) -> Option<&Message> {
        return self.messages.get(index);
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }
}
