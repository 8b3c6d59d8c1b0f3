#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::fmt;

use chrono::DateTime;
use chrono::Local;

use super::Author;

/// Position of a message in its session's log. Ids are handed out in creation
/// order, so sorting by id is sorting by display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(value: u64) -> MessageId {
        return MessageId(value);
    }

    pub fn value(&self) -> u64 {
        return self.0;
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    id: MessageId,
    author: Author,
    text: String,
    created_at: DateTime<Local>,
}

impl Message {
    pub fn new(id: MessageId, author: Author, text: &str) -> Message {
        return Message::new_at(id, author, text, Local::now());
    }

    pub fn new_at(
        id: MessageId,
        author: Author,
        text: &str,
        created_at: DateTime<Local>,
    ) -> Message {
        return Message {
            id,
            author,
            text: text.to_string(),
            created_at,
        };
    }

    pub fn id(&self) -> MessageId {
        return self.id;
    }

    pub fn author(&self) -> Author {
        return self.author;
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn created_at(&self) -> DateTime<Local> {
        return self.created_at;
    }

    /// Clock time shown next to the author on a chat bubble.
    pub fn time_label(&self) -> String {
        return self.created_at.format("%H:%M").to_string();
    }
}
