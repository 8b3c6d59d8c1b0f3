use super::PendingReply;
use super::ReplyTicket;
use super::SessionId;

/// Requests from the UI to the background worker.
pub enum Action {
    ScheduleReply(SessionId, PendingReply),
    ReplyApplied(SessionId, ReplyTicket),
}
