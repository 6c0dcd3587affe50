use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    /// The logged in user.
    Person,
    /// Replies from the screening service.
    Assistant,
    /// Messages produced by the client itself.
    App,
}

impl Author {
    /// Sender marker prefixed to a message's display string.
    pub fn marker(&self) -> &'static str {
        match self {
            Author::Person => return "🧑",
            Author::Assistant => return "🤖",
            Author::App => return "👋",
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Author::Person => return write!(f, "You"),
            Author::Assistant => return write!(f, "Assistant"),
            Author::App => return write!(f, "Screenchat"),
        }
    }
}
