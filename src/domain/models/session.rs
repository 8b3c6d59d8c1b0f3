use std::fmt;
use std::time::Duration;

use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Short id made of the first two groups of a v4 UUID.
    pub fn create() -> SessionId {
        let id = Uuid::new_v4()
            .to_string()
            .split('-')
            .take(2)
            .collect::<Vec<&str>>()
            .join("-");

        return SessionId(id);
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// Identifies one scheduled bot reply within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplyTicket(u64);

impl ReplyTicket {
    pub fn new(value: u64) -> ReplyTicket {
        return ReplyTicket(value);
    }
}

impl fmt::Display for ReplyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "#{}", self.0);
    }
}

/// Handed back for every accepted user message. The caller is expected to
/// complete `ticket` once `delay` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub delay: Duration,
}
