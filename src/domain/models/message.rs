#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub text: String,
    mtype: MessageType,
}

fn split_word(word: &str, max_width: usize) -> Vec<String> {
    if word.width() <= max_width {
        return vec![word.to_string()];
    }

    let mut chunks: Vec<String> = vec![];
    let mut current = String::new();
    let mut current_width = 0;
    for char in word.chars() {
        let char_width = char.width().unwrap_or(0);
        if current_width + char_width > max_width && !current.is_empty() {
            chunks.push(current);
            current = String::new();
            current_width = 0;
        }
        current.push(char);
        current_width += char_width;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    return chunks;
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            mtype,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn is_person(&self) -> bool {
        return self.author == Author::Person;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.replace('\t', "  ");
    }

    /// Word wraps the text to the given display width. Words wider than the
    /// line are broken across lines.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let line_max_width = line_max_width.max(1);
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut current = String::new();
            let mut current_width = 0;

            for word in full_line.split(' ') {
                for chunk in split_word(word, line_max_width) {
                    let chunk_width = chunk.width();
                    if current_width > 0 && current_width + 1 + chunk_width > line_max_width {
                        lines.push(current.trim_end().to_string());
                        current = String::new();
                        current_width = 0;
                    }
                    if current_width > 0 {
                        current.push(' ');
                        current_width += 1;
                    }
                    current.push_str(&chunk);
                    current_width += chunk_width;
                }
            }

            lines.push(current.trim_end().to_string());
        }

        return lines;
    }
}
