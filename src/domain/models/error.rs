use thiserror::Error;

use super::ReplyTicket;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Submitted text was empty once trimmed. Nothing was appended.
    #[error("message text cannot be empty")]
    InvalidInput,

    /// A reply was completed for a ticket the session is not waiting on.
    #[error("no pending reply for ticket {0}")]
    UnknownReply(ReplyTicket),
}
